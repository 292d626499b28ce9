use mixtape::PlaylistCatalog;

/// Catalog rendering followed by every record, indented under its playlist.
pub fn render(catalog: &PlaylistCatalog) -> String {
    let mut out = catalog.to_string();
    for playlist in catalog {
        out.push_str(&format!("\n{}:\n", playlist.name()));
        for record in playlist {
            out.push_str(&format!("  {record}\n"));
        }
    }
    out
}
