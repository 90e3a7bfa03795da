use crate::models::ResourceDescriptor;

use tabled::{Table, Tabled, settings::Style};

#[derive(Tabled)]
struct ResourceDisplay {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    resource_type: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Pass")]
    pass: String,
}

/// Render resources as a table, with the pass each one is deleted in.
pub fn resource_table(resources: &[ResourceDescriptor]) -> String {
    let table_rows: Vec<ResourceDisplay> = resources
        .iter()
        .map(|resource| ResourceDisplay {
            name: resource.name.clone(),
            resource_type: resource.resource_type.clone(),
            location: resource.location.clone(),
            pass: match resource.kind() {
                Some(kind) => (kind.priority() + 1).to_string(),
                None => "sweep".to_string(),
            },
        })
        .collect();

    let mut table = Table::new(table_rows);
    table.with(Style::rounded());
    table.to_string()
}
