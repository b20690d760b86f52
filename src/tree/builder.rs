use crate::edge::node::EdgeIx;
use crate::edge::{EdgeId, EdgeNode};
use crate::error::BuildError;
use crate::tree::graph::Arena;
use crate::tree::{HorizonTree, RawEdge};

use indexmap::map::Entry;
use log::{debug, warn};
use measure_time::debug_time;
use std::str::FromStr;

const DEFAULT_PROBABILITY_TOLERANCE: f64 = 0.05;

pub const PROBABILITY_TOLERANCE_ENV: &str = "HORIZON_PROBABILITY_TOLERANCE";
pub const STRICT_LEVELS_ENV: &str = "HORIZON_STRICT_LEVELS";

/// Validation applied while a tree is assembled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildOptions {
    /// How far the probabilities of siblings may stray from summing to one
    /// before a warning is logged. Never fatal.
    pub probability_tolerance: f64,

    /// Reject level-0 edges hanging off an alternative branch, instead
    /// of logging them.
    pub strict_levels: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            probability_tolerance: DEFAULT_PROBABILITY_TOLERANCE,
            strict_levels: false,
        }
    }
}

impl BuildOptions {
    pub fn with_probability_tolerance(self, probability_tolerance: f64) -> Self {
        Self {
            probability_tolerance,
            ..self
        }
    }

    pub fn with_strict_levels(self, strict_levels: bool) -> Self {
        Self {
            strict_levels,
            ..self
        }
    }

    /// Reads [`PROBABILITY_TOLERANCE_ENV`] and [`STRICT_LEVELS_ENV`],
    /// keeping the default for any variable that is unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            probability_tolerance: read_env(PROBABILITY_TOLERANCE_ENV)
                .unwrap_or(defaults.probability_tolerance),
            strict_levels: read_env(STRICT_LEVELS_ENV).unwrap_or(defaults.strict_levels),
        }
    }
}

pub(crate) fn read_env<T: FromStr>(key: &str) -> Option<T> {
    let value = std::env::var(key).ok()?;
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("Ignoring {key}={value:?}, could not parse value");
            None
        }
    }
}

/// Assembles a [`HorizonTree`] from a flat batch of [`RawEdge`]s.
///
/// Records may arrive in any order; a parent listed after its children
/// is still wired correctly. Children keep the order they were given in.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    options: BuildOptions,
    records: Vec<RawEdge>,
}

impl TreeBuilder {
    pub fn new(options: BuildOptions) -> Self {
        Self {
            options,
            records: Vec::new(),
        }
    }

    pub fn push(mut self, record: RawEdge) -> Self {
        self.records.push(record);
        self
    }

    pub fn extend(mut self, records: impl IntoIterator<Item = RawEdge>) -> Self {
        self.records.extend(records);
        self
    }

    pub fn build(self) -> Result<HorizonTree, BuildError> {
        debug_time!("horizon tree build");

        if self.records.is_empty() {
            return Err(BuildError::Empty);
        }

        let mut arena = Arena::with_capacity_and_hasher(self.records.len(), Default::default());
        let mut parents: Vec<Option<EdgeId>> = Vec::with_capacity(self.records.len());
        let mut root: Option<EdgeIx> = None;

        for record in self.records {
            let metadata = record.metadata.into_metadata(record.id)?;
            let node = EdgeNode::new(record.id, record.level, record.probability, metadata);

            let index = match arena.entry(record.id) {
                Entry::Occupied(_) => return Err(BuildError::DuplicateEdge(record.id)),
                Entry::Vacant(entry) => {
                    let index = entry.index();
                    entry.insert(node);
                    index
                }
            };

            if record.parent.is_none() {
                if let Some(existing) = root {
                    return Err(BuildError::MultipleRoots(arena[existing].id, record.id));
                }
                root = Some(index);
            }

            parents.push(record.parent);
        }

        let root = root.ok_or(BuildError::NoRoot)?;

        for (index, parent) in parents.into_iter().enumerate() {
            let Some(parent) = parent else { continue };
            let Some(parent_index) = arena.get_index_of(&parent) else {
                return Err(BuildError::MissingParent {
                    edge: arena[index].id,
                    parent,
                });
            };

            arena[index].parent = Some(parent_index);
            arena[parent_index].children.push(index);
        }

        let reachable = count_reachable(&arena, root);
        if reachable != arena.len() {
            return Err(BuildError::Unreachable(arena.len() - reachable));
        }

        validate_levels(&arena, self.options)?;
        validate_probabilities(&arena, self.options);

        if !arena[root].is_mpp() {
            debug!("Root edge {} is not on the most probable path", arena[root].id);
        }

        debug!("Built horizon tree with {} edges", arena.len());
        Ok(HorizonTree { arena, root })
    }
}

/// Every edge has a single parent, so a walk down from the root visits
/// each reachable edge once. Edges caught in a parent cycle are never
/// reached.
fn count_reachable(arena: &Arena, root: EdgeIx) -> usize {
    let mut stack = vec![root];
    let mut visited = 0;

    while let Some(index) = stack.pop() {
        visited += 1;
        stack.extend(arena[index].children.iter().copied());
    }

    visited
}

fn validate_levels(arena: &Arena, options: BuildOptions) -> Result<(), BuildError> {
    for node in arena.values() {
        let Some(parent) = node.parent.map(|index| &arena[index]) else {
            continue;
        };

        if node.is_mpp() && !parent.is_mpp() {
            if options.strict_levels {
                return Err(BuildError::DetachedMpp {
                    edge: node.id,
                    parent: parent.id,
                });
            }

            warn!(
                "Edge {} is on the most probable path but its parent {} is not",
                node.id, parent.id
            );
        }
    }

    Ok(())
}

fn validate_probabilities(arena: &Arena, options: BuildOptions) {
    for node in arena.values().filter(|node| !node.children.is_empty()) {
        let total = node
            .children
            .iter()
            .map(|child| arena[*child].probability)
            .sum::<f64>();

        if (total - 1.0).abs() > options.probability_tolerance {
            warn!(
                "Children of edge {} have probabilities summing to {total:.3}",
                node.id
            );
        }
    }
}
