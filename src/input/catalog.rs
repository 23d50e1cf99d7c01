use std::collections::HashMap;
use std::path::Path;

use tracing::warn;

use crate::input::InputError;
use crate::input::table::{Table, read_table, resolve_table_path};
use crate::model::records::{
    AntibioticClass, AntibioticRecord, DataSourceNode, LocalizedName, OrganismClass,
    OrganismRecord,
};

pub const DATA_SOURCES_FILE: &str = "data_sources.csv";
pub const ANTIBIOTICS_FILE: &str = "antibiotics.csv";
pub const ORGANISMS_FILE: &str = "organisms.csv";
pub const ANTIBIOTIC_CLASSES_FILE: &str = "antibiotic_classes.csv";
pub const ORGANISM_CLASSES_FILE: &str = "organism_classes.csv";

/// The five relational reference tables, loaded once per run and
/// read-only afterwards. Vectors preserve declaration (file row) order
/// because that order defines the class rank tables used for sorting.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub sources: Vec<DataSourceNode>,
    pub antibiotics: Vec<AntibioticRecord>,
    pub organisms: Vec<OrganismRecord>,
    pub antibiotic_classes: Vec<AntibioticClass>,
    pub organism_classes: Vec<OrganismClass>,

    source_by_id: HashMap<String, usize>,
    antibiotic_by_code: HashMap<String, usize>,
    organism_by_code: HashMap<String, usize>,
    antibiotic_class_by_id: HashMap<String, usize>,
    organism_class_by_id: HashMap<String, usize>,
}

impl Catalog {
    pub fn load(dir: &Path) -> Result<Catalog, InputError> {
        let sources = load_sources(&read_table(&resolve_table_path(dir, DATA_SOURCES_FILE))?)?;
        let antibiotics =
            load_antibiotics(&read_table(&resolve_table_path(dir, ANTIBIOTICS_FILE))?)?;
        let organisms = load_organisms(&read_table(&resolve_table_path(dir, ORGANISMS_FILE))?)?;
        let antibiotic_classes = load_antibiotic_classes(&read_table(&resolve_table_path(
            dir,
            ANTIBIOTIC_CLASSES_FILE,
        ))?)?;
        let organism_classes = load_organism_classes(&read_table(&resolve_table_path(
            dir,
            ORGANISM_CLASSES_FILE,
        ))?)?;

        Ok(Catalog::from_records(
            sources,
            antibiotics,
            organisms,
            antibiotic_classes,
            organism_classes,
        ))
    }

    /// Indexes already-typed records. `load` goes through here; tests
    /// and embedders can build a catalog without touching the disk.
    pub fn from_records(
        sources: Vec<DataSourceNode>,
        antibiotics: Vec<AntibioticRecord>,
        organisms: Vec<OrganismRecord>,
        antibiotic_classes: Vec<AntibioticClass>,
        organism_classes: Vec<OrganismClass>,
    ) -> Catalog {
        let source_by_id = index_by(&sources, |s: &DataSourceNode| &s.id, DATA_SOURCES_FILE);
        let antibiotic_by_code = index_by(
            &antibiotics,
            |a: &AntibioticRecord| &a.code,
            ANTIBIOTICS_FILE,
        );
        let organism_by_code = index_by(&organisms, |o: &OrganismRecord| &o.code, ORGANISMS_FILE);
        let antibiotic_class_by_id = index_by(
            &antibiotic_classes,
            |c: &AntibioticClass| &c.id,
            ANTIBIOTIC_CLASSES_FILE,
        );
        let organism_class_by_id = index_by(
            &organism_classes,
            |c: &OrganismClass| &c.id,
            ORGANISM_CLASSES_FILE,
        );

        Catalog {
            sources,
            antibiotics,
            organisms,
            antibiotic_classes,
            organism_classes,
            source_by_id,
            antibiotic_by_code,
            organism_by_code,
            antibiotic_class_by_id,
            organism_class_by_id,
        }
    }

    pub fn source(&self, id: &str) -> Option<&DataSourceNode> {
        self.source_by_id.get(id).map(|&i| &self.sources[i])
    }

    pub fn antibiotic(&self, code: &str) -> Option<&AntibioticRecord> {
        self.antibiotic_by_code
            .get(code)
            .map(|&i| &self.antibiotics[i])
    }

    pub fn organism(&self, code: &str) -> Option<&OrganismRecord> {
        self.organism_by_code.get(code).map(|&i| &self.organisms[i])
    }

    pub fn antibiotic_class(&self, id: &str) -> Option<&AntibioticClass> {
        self.antibiotic_class_by_id
            .get(id)
            .map(|&i| &self.antibiotic_classes[i])
    }

    pub fn organism_class(&self, id: &str) -> Option<&OrganismClass> {
        self.organism_class_by_id
            .get(id)
            .map(|&i| &self.organism_classes[i])
    }

    /// Super-class of an organism class: its parent when that parent is
    /// itself parentless. A deeper chain breaks the two-level contract.
    pub fn super_class_of(&self, class_id: &str) -> Option<&OrganismClass> {
        let class = self.organism_class(class_id)?;
        let parent = self.organism_class(class.parent_id.as_deref()?)?;
        if parent.parent_id.is_some() {
            return None;
        }
        Some(parent)
    }
}

fn index_by<T>(items: &[T], key: impl Fn(&T) -> &String, file: &str) -> HashMap<String, usize> {
    let mut map = HashMap::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        let k = key(item);
        if map.contains_key(k) {
            warn!("duplicate key `{k}` in {file}; keeping first occurrence");
            continue;
        }
        map.insert(k.clone(), idx);
    }
    map
}

fn optional_id(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn localized(table: &Table, row: &[String], de: usize, en: usize) -> LocalizedName {
    LocalizedName::new(table.field(row, de), table.field(row, en))
}

fn load_sources(table: &Table) -> Result<Vec<DataSourceNode>, InputError> {
    let id = table.require_column("id")?;
    let parent_id = table.require_column("parent_id")?;
    let name_de = table.require_column("name_de")?;
    let name_en = table.require_column("name_en")?;
    let source_file = table.require_column("source_file")?;

    let mut out = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let key = table.field(row, id);
        if key.is_empty() {
            warn!("{}: row without id; skipping", table.path.display());
            continue;
        }
        out.push(DataSourceNode {
            id: key.to_string(),
            parent_id: optional_id(table.field(row, parent_id)),
            name: localized(table, row, name_de, name_en),
            source_file: table.field(row, source_file).to_string(),
        });
    }
    Ok(out)
}

fn load_antibiotics(table: &Table) -> Result<Vec<AntibioticRecord>, InputError> {
    let code = table.require_column("amr_code")?;
    let class_id = table
        .column_any(&["class", "class_id"])
        .ok_or_else(|| InputError::missing_column(&table.path, "class"))?;
    let name_de = table.require_column("full_name_de")?;
    let name_en = table.require_column("full_name_en")?;

    let mut out = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let key = table.field(row, code);
        if key.is_empty() {
            warn!("{}: row without amr_code; skipping", table.path.display());
            continue;
        }
        out.push(AntibioticRecord {
            code: key.to_string(),
            class_id: table.field(row, class_id).to_string(),
            full_name: localized(table, row, name_de, name_en),
        });
    }
    Ok(out)
}

fn load_organisms(table: &Table) -> Result<Vec<OrganismRecord>, InputError> {
    let code = table.require_column("amr_code")?;
    let class_id = table.require_column("class_id")?;
    let name_de = table.require_column("full_name_de")?;
    let name_en = table.require_column("full_name_en")?;

    let mut out = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let key = table.field(row, code);
        if key.is_empty() {
            warn!("{}: row without amr_code; skipping", table.path.display());
            continue;
        }
        out.push(OrganismRecord {
            code: key.to_string(),
            class_id: table.field(row, class_id).to_string(),
            full_name: localized(table, row, name_de, name_en),
        });
    }
    Ok(out)
}

fn load_antibiotic_classes(table: &Table) -> Result<Vec<AntibioticClass>, InputError> {
    let id = table.require_column("id")?;
    let name_de = table.require_column("name_de")?;
    let name_en = table.require_column("name_en")?;

    let mut out = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let key = table.field(row, id);
        if key.is_empty() {
            warn!("{}: row without id; skipping", table.path.display());
            continue;
        }
        out.push(AntibioticClass {
            id: key.to_string(),
            name: localized(table, row, name_de, name_en),
        });
    }
    Ok(out)
}

fn load_organism_classes(table: &Table) -> Result<Vec<OrganismClass>, InputError> {
    let id = table.require_column("id")?;
    let parent_id = table.require_column("parent_id")?;
    let name_de = table.require_column("name_de")?;
    let name_en = table.require_column("name_en")?;

    let mut out = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let key = table.field(row, id);
        if key.is_empty() {
            warn!("{}: row without id; skipping", table.path.display());
            continue;
        }
        out.push(OrganismClass {
            id: key.to_string(),
            parent_id: optional_id(table.field(row, parent_id)),
            name: localized(table, row, name_de, name_en),
        });
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/catalog.rs"]
mod tests;
