// Wine command resolution (no I/O)

use crate::config::types::{NamedPaths, WineSelection};
use std::collections::HashMap;

/// The wine invocation for one launch: the command to spawn and the
/// environment to overlay on top of the inherited one.
#[derive(Clone, Debug)]
pub struct WineParams {
    pub command: String,
    pub env: HashMap<String, String>,
}

/// Resolve a game's wine selection against the named path collections.
///
/// Either id may be the -1 sentinel, which defers to the collection
/// default. An unresolvable executable falls back to bare `wine` on PATH;
/// an unresolvable prefix just leaves WINEPREFIX unset so wine uses its
/// own default.
pub fn resolve_wine_params(selection: &WineSelection, named_paths: &NamedPaths) -> WineParams {
    let command = named_paths
        .wine_execs
        .resolve(selection.wine_exec)
        .map(|np| np.path.clone())
        .unwrap_or_else(|| "wine".to_string());

    let mut env = HashMap::new();
    if let Some(prefix) = named_paths.wine_prefixes.resolve(selection.wine_prefix) {
        env.insert("WINEPREFIX".to_string(), prefix.path.clone());
    }

    WineParams { command, env }
}
