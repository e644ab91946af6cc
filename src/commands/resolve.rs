use anyhow::Result;
use open_assets::{invocation, Resolution};

use super::RootArgs;

pub fn cmd_resolve(roots: &RootArgs) -> Result<()> {
    let (root, resolution) = invocation::resolve_from(roots)?;
    if let Resolution::Found { path, source } = &resolution {
        if !path.is_dir() {
            eprintln!("Warning: {} does not exist", path.display());
        }
        eprintln!("Found via {source}");
    }
    println!("{}", resolution.require(&root)?.display());
    Ok(())
}
