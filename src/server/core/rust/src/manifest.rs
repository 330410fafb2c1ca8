/* src/server/core/rust/src/manifest.rs */

use serde::Serialize;

use crate::page::PageDef;
use crate::procedure::ProcedureDef;

#[derive(Serialize)]
pub struct Manifest {
  pub version: u32,
  pub procedures: Vec<String>,
  pub pages: Vec<PageSchema>,
}

#[derive(Serialize)]
pub struct PageSchema {
  pub route: String,
  /// Procedures the page calls, keyed the same way as the page payload.
  pub loaders: Vec<LoaderSchema>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoaderSchema {
  pub data_key: String,
  pub procedure: String,
}

pub fn build_manifest(procedures: &[ProcedureDef], pages: &[PageDef]) -> Manifest {
  let mut names: Vec<String> = procedures.iter().map(|p| p.name.clone()).collect();
  names.sort();
  let pages = pages
    .iter()
    .map(|page| PageSchema {
      route: page.localized_route(),
      loaders: page
        .loaders
        .iter()
        .map(|l| LoaderSchema { data_key: l.data_key.clone(), procedure: l.procedure.clone() })
        .collect(),
    })
    .collect();
  Manifest { version: 1, procedures: names, pages }
}
