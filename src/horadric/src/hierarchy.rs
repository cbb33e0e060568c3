//! Item type hierarchy and runeword compatibility
//!
//! Item types point at up to two "equivalent" parent types. The ancestor
//! closure of a type is the type itself plus every type reachable through
//! those links. A runeword accepts a base item when the closure of the
//! base's types hits one of the runeword's valid types and none of its
//! excluded types.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// One item type row with its direct parents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeNode {
    pub code: String,
    #[serde(default)]
    pub equiv1: Option<String>,
    #[serde(default)]
    pub equiv2: Option<String>,
}

impl TypeNode {
    pub fn new(code: impl Into<String>, equiv1: Option<&str>, equiv2: Option<&str>) -> Self {
        Self {
            code: code.into(),
            equiv1: equiv1.map(str::to_string),
            equiv2: equiv2.map(str::to_string),
        }
    }

    /// Non-empty parent codes
    pub fn parents(&self) -> impl Iterator<Item = &str> {
        [self.equiv1.as_deref(), self.equiv2.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

/// Precomputed ancestor sets for every type in the graph
///
/// Codes are interned into an arena; each closure is computed with an
/// explicit stack and a per-call visited vector, so cyclic graphs terminate.
#[derive(Debug, Clone, Default)]
pub struct AncestorClosure {
    index: HashMap<String, usize>,
    codes: Vec<String>,
    ancestors: Vec<Vec<usize>>,
}

impl AncestorClosure {
    pub fn build(nodes: &[TypeNode]) -> Self {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut codes: Vec<String> = Vec::new();
        let mut parents: Vec<Vec<usize>> = Vec::new();

        for node in nodes {
            let code = node.code.trim();
            if code.is_empty() {
                continue;
            }
            let child = intern(code, &mut index, &mut codes, &mut parents);
            for parent in node.parents() {
                let parent = intern(parent, &mut index, &mut codes, &mut parents);
                if !parents[child].contains(&parent) {
                    parents[child].push(parent);
                }
            }
        }

        let ancestors = (0..codes.len())
            .map(|start| walk(start, &parents))
            .collect();

        Self {
            index,
            codes,
            ancestors,
        }
    }

    /// Number of distinct types in the graph
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Whether a code appears anywhere in the graph
    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// A code and all of its ancestors. Unknown codes expand to themselves.
    pub fn expand<'a>(&'a self, code: &'a str) -> Vec<&'a str> {
        match self.index.get(code) {
            Some(&id) => self.ancestors[id]
                .iter()
                .map(|&a| self.codes[a].as_str())
                .collect(),
            None => vec![code],
        }
    }

    /// Ancestors of a known code, `None` when the code is not in the graph
    pub fn ancestors(&self, code: &str) -> Option<Vec<&str>> {
        self.index.get(code).map(|&id| {
            self.ancestors[id]
                .iter()
                .map(|&a| self.codes[a].as_str())
                .collect()
        })
    }

    /// The whole closure as `code -> sorted ancestors`
    pub fn as_map(&self) -> BTreeMap<String, Vec<String>> {
        self.codes
            .iter()
            .zip(&self.ancestors)
            .map(|(code, ids)| {
                let mut set: Vec<String> = ids.iter().map(|&a| self.codes[a].clone()).collect();
                set.sort();
                (code.clone(), set)
            })
            .collect()
    }
}

fn intern(
    code: &str,
    index: &mut HashMap<String, usize>,
    codes: &mut Vec<String>,
    parents: &mut Vec<Vec<usize>>,
) -> usize {
    if let Some(&id) = index.get(code) {
        return id;
    }
    let id = codes.len();
    index.insert(code.to_string(), id);
    codes.push(code.to_string());
    parents.push(Vec::new());
    id
}

fn walk(start: usize, parents: &[Vec<usize>]) -> Vec<usize> {
    let mut visited = vec![false; parents.len()];
    let mut stack = vec![start];
    let mut out = Vec::new();

    while let Some(id) = stack.pop() {
        if visited[id] {
            continue;
        }
        visited[id] = true;
        out.push(id);
        stack.extend(parents[id].iter().copied().filter(|&p| !visited[p]));
    }

    out
}

/// What a runeword needs from its base item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunewordRequirement {
    pub valid_types: Vec<String>,
    #[serde(default)]
    pub excluded_types: Vec<String>,
    pub required_sockets: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunewordRecipe {
    pub id: i64,
    pub name: String,
    pub requirement: RunewordRequirement,
}

/// A base item considered as a runeword host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseItemCandidate {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub category: String,
    pub primary_type: String,
    #[serde(default)]
    pub secondary_type: Option<String>,
    pub max_sockets: u32,
}

impl BaseItemCandidate {
    /// Primary and (if set) secondary type codes
    pub fn type_codes(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary_type.as_str())
            .chain(self.secondary_type.as_deref())
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

/// A runeword that can be made in a base item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityEdge {
    pub recipe_id: i64,
    pub base_item_id: i64,
    pub required_sockets: u32,
}

/// Compute every (runeword, base item) pairing.
///
/// Recipes without sockets or valid types are rejected, and recipes whose
/// valid types are all unknown to the graph are skipped. Neither aborts the
/// run.
pub fn compute_compatibility(
    recipes: &[RunewordRecipe],
    bases: &[BaseItemCandidate],
    closure: &AncestorClosure,
) -> Vec<CompatibilityEdge> {
    let mut edges = Vec::new();
    let mut processed = 0usize;
    let mut skipped = 0usize;

    for recipe in recipes {
        let req = &recipe.requirement;
        let valid = code_set(&req.valid_types);
        let excluded = code_set(&req.excluded_types);

        if req.required_sockets == 0 || valid.is_empty() {
            tracing::debug!(
                recipe = recipe.id,
                name = %recipe.name,
                sockets = req.required_sockets,
                "Rejecting runeword without sockets or valid types"
            );
            skipped += 1;
            continue;
        }

        let unknown_excluded: Vec<&str> = excluded.iter().copied().filter(|c| !closure.contains(c)).collect();
        if !unknown_excluded.is_empty() {
            tracing::warn!(recipe = recipe.id, codes = ?unknown_excluded, "Unknown excluded item types");
        }
        let unknown_valid: Vec<&str> = valid.iter().copied().filter(|c| !closure.contains(c)).collect();
        if unknown_valid.len() == valid.len() {
            tracing::warn!(
                recipe = recipe.id,
                name = %recipe.name,
                codes = ?unknown_valid,
                "Skipping runeword: no valid item type is known"
            );
            skipped += 1;
            continue;
        }
        if !unknown_valid.is_empty() {
            tracing::warn!(recipe = recipe.id, codes = ?unknown_valid, "Unknown valid item types");
        }

        processed += 1;
        let before = edges.len();

        for base in bases {
            if base.max_sockets < req.required_sockets {
                continue;
            }
            let types: HashSet<&str> = base.type_codes().flat_map(|c| closure.expand(c)).collect();
            if types.iter().any(|t| excluded.contains(t)) {
                tracing::trace!(recipe = recipe.id, base = %base.code, "Excluded base type");
                continue;
            }
            if types.iter().any(|t| valid.contains(t)) {
                edges.push(CompatibilityEdge {
                    recipe_id: recipe.id,
                    base_item_id: base.id,
                    required_sockets: req.required_sockets,
                });
            }
        }

        tracing::debug!(
            recipe = recipe.id,
            name = %recipe.name,
            bases = edges.len() - before,
            "Matched runeword bases"
        );
    }

    tracing::info!(
        processed,
        skipped,
        edges = edges.len(),
        "Computed runeword compatibility"
    );

    edges
}

fn code_set(codes: &[String]) -> HashSet<&str> {
    codes
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(id: i64, primary: &str, secondary: Option<&str>, sockets: u32) -> BaseItemCandidate {
        BaseItemCandidate {
            id,
            code: format!("b{id}"),
            name: format!("Base {id}"),
            category: "weapon".to_string(),
            primary_type: primary.to_string(),
            secondary_type: secondary.map(str::to_string),
            max_sockets: sockets,
        }
    }

    fn recipe(id: i64, valid: &[&str], excluded: &[&str], sockets: u32) -> RunewordRecipe {
        RunewordRecipe {
            id,
            name: format!("Recipe {id}"),
            requirement: RunewordRequirement {
                valid_types: valid.iter().map(|s| s.to_string()).collect(),
                excluded_types: excluded.iter().map(|s| s.to_string()).collect(),
                required_sockets: sockets,
            },
        }
    }

    fn sorted(mut v: Vec<&str>) -> Vec<&str> {
        v.sort();
        v
    }

    #[test]
    fn test_closure_is_transitive() {
        let closure = AncestorClosure::build(&[
            TypeNode::new("swor", Some("mele"), None),
            TypeNode::new("mele", Some("weap"), None),
        ]);
        assert_eq!(sorted(closure.expand("swor")), vec!["mele", "swor", "weap"]);
        // Undeclared parent is still in the graph
        assert!(closure.contains("weap"));
        assert_eq!(closure.expand("weap"), vec!["weap"]);
    }

    #[test]
    fn test_closure_survives_cycles() {
        let closure = AncestorClosure::build(&[
            TypeNode::new("a", Some("b"), None),
            TypeNode::new("b", Some("c"), None),
            TypeNode::new("c", Some("a"), None),
        ]);
        for code in ["a", "b", "c"] {
            assert_eq!(sorted(closure.expand(code)), vec!["a", "b", "c"]);
        }
    }

    #[test]
    fn test_closure_merges_rows_and_ignores_blanks() {
        let closure = AncestorClosure::build(&[
            TypeNode::new("axe", Some("mele"), Some("")),
            TypeNode::new("axe", Some("weap"), None),
            TypeNode::new("", Some("junk"), None),
        ]);
        assert_eq!(sorted(closure.expand("axe")), vec!["axe", "mele", "weap"]);
        assert!(!closure.contains(""));
        assert!(!closure.contains("junk"));
        assert_eq!(closure.len(), 3);
    }

    #[test]
    fn test_unknown_code_expands_to_itself() {
        let closure = AncestorClosure::build(&[]);
        assert!(closure.is_empty());
        assert_eq!(closure.expand("nope"), vec!["nope"]);
        assert_eq!(closure.ancestors("nope"), None);
    }

    #[test]
    fn test_as_map() {
        let closure = AncestorClosure::build(&[TypeNode::new("shie", Some("armo"), None)]);
        let map = closure.as_map();
        assert_eq!(map["shie"], vec!["armo".to_string(), "shie".to_string()]);
        assert_eq!(map["armo"], vec!["armo".to_string()]);
    }

    #[test]
    fn test_hierarchy_transitivity_for_recipes() {
        let closure = AncestorClosure::build(&[
            TypeNode::new("A", Some("B"), None),
            TypeNode::new("B", Some("C"), None),
        ]);
        let edges = compute_compatibility(&[recipe(1, &["C"], &[], 2)], &[base(10, "A", None, 3)], &closure);
        assert_eq!(
            edges,
            vec![CompatibilityEdge {
                recipe_id: 1,
                base_item_id: 10,
                required_sockets: 2
            }]
        );
    }

    #[test]
    fn test_socket_boundary() {
        let closure = AncestorClosure::build(&[TypeNode::new("swor", Some("weap"), None)]);
        let bases = [base(1, "swor", None, 4), base(2, "swor", None, 3)];
        let edges = compute_compatibility(&[recipe(7, &["weap"], &[], 4)], &bases, &closure);
        let ids: Vec<_> = edges.iter().map(|e| e.base_item_id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_exclusion_through_secondary_type() {
        let closure = AncestorClosure::build(&[
            TypeNode::new("h2h", Some("mele"), None),
            TypeNode::new("ashd", Some("armo"), None),
        ]);
        let bases = [base(1, "h2h", None, 3), base(2, "h2h", Some("ashd"), 3)];
        let edges = compute_compatibility(&[recipe(1, &["mele"], &["armo"], 2)], &bases, &closure);
        let ids: Vec<_> = edges.iter().map(|e| e.base_item_id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_secondary_type_can_qualify() {
        let closure = AncestorClosure::build(&[
            TypeNode::new("orb", Some("weap"), None),
            TypeNode::new("sorc", Some("clas"), None),
        ]);
        let bases = [base(5, "orb", Some("sorc"), 3)];
        let edges = compute_compatibility(&[recipe(1, &["clas"], &[], 3)], &bases, &closure);
        assert_eq!(edges.len(), 1);
    }

    #[test]
    fn test_rejects_invalid_recipes() {
        let closure = AncestorClosure::build(&[TypeNode::new("swor", Some("weap"), None)]);
        let bases = [base(1, "swor", None, 6)];
        let recipes = [
            recipe(1, &["weap"], &[], 0),
            recipe(2, &[], &[], 2),
            recipe(3, &["  "], &[], 2),
            recipe(4, &["nothing"], &[], 2),
        ];
        assert!(compute_compatibility(&recipes, &bases, &closure).is_empty());
    }

    #[test]
    fn test_partially_unknown_valid_types_still_match() {
        let closure = AncestorClosure::build(&[TypeNode::new("swor", Some("weap"), None)]);
        let bases = [base(1, "swor", None, 2)];
        let edges = compute_compatibility(&[recipe(1, &["weap", "nothing"], &[], 2)], &bases, &closure);
        assert_eq!(edges.len(), 1);
    }
}
