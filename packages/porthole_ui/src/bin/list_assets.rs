//! Print the embedded bundle contents, for checking a packaged build.

fn main() {
    let store = porthole_ui::store();
    let mut paths: Vec<&str> = store.paths().collect();
    paths.sort_unstable();

    println!("Embedded files ({}):", store.len());
    for path in paths {
        let asset = store.must_lookup(path);
        println!("  {:>8} bytes  {}", asset.size(), path);
    }
}
