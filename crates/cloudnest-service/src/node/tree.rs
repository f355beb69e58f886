//! Subtree discovery for cascading folder operations.

use std::collections::VecDeque;

use uuid::Uuid;

use cloudnest_core::result::AppResult;
use cloudnest_database::store::NodeStore;
use cloudnest_entity::node::Node;

/// Collect the ids of `root` and all of its transitive descendants.
///
/// Breadth-first with an explicit queue: one `list_children` call per
/// folder visited, no recursion, so arbitrarily deep or wide trees are
/// handled without stack limits. A file root short-circuits to a
/// singleton, since files have no children.
pub async fn collect_subtree(
    store: &dyn NodeStore,
    owner_id: &str,
    root: &Node,
) -> AppResult<Vec<Uuid>> {
    if !root.is_folder {
        return Ok(vec![root.id]);
    }

    let mut result = vec![root.id];
    let mut queue = VecDeque::from([root.id]);

    while let Some(folder_id) = queue.pop_front() {
        for child in store.list_children(owner_id, Some(folder_id)).await? {
            result.push(child.id);
            if child.is_folder {
                queue.push_back(child.id);
            }
        }
    }

    Ok(result)
}
