//! Game tree construction with per-level transposition merging
//!
//! The tree is stored as an arena of [`Node`]s addressed by [`NodeId`]. Nodes are
//! expanded one breadth-first level at a time; successors that reach a state
//! already created on the next level are linked to the existing node instead of
//! getting a new one, so the structure is a DAG layered by depth.

use std::collections::BTreeMap;

use log::{debug, trace};

use crate::{
    Error, Result,
    game::{GameState, expand},
};

/// Index of a node inside its [`GameTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node in the game tree.
///
/// A node may be reached from several parents when different move orders lead
/// to the same state. Parent and child links are plain indices into the arena.
#[derive(Debug, Clone)]
pub struct Node {
    state: GameState,
    depth: u32,
    value: Option<i32>,
    parents: Vec<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(state: GameState, depth: u32) -> Self {
        Self {
            state,
            depth,
            value: None,
            parents: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Distance from the root
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Value written by the last search pass, `None` if the pass skipped this node
    pub fn value(&self) -> Option<i32> {
        self.value
    }

    pub fn parents(&self) -> &[NodeId] {
        &self.parents
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena-backed game DAG rooted at a single state.
#[derive(Debug, Clone)]
pub struct GameTree {
    nodes: Vec<Node>,
    built: bool,
}

impl GameTree {
    /// Id of the root node
    pub const ROOT: NodeId = NodeId(0);

    /// Create a tree holding only `root`. Call [`GameTree::generate`] to expand it.
    pub fn new(root: GameState) -> Self {
        Self {
            nodes: vec![Node::new(root, 0)],
            built: false,
        }
    }

    /// Build a tree `max_depth` levels deep, or the full state space when `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use parity_split::{game::GameState, tree::GameTree};
    ///
    /// let tree = GameTree::build(GameState::from_numbers(&[2]), None);
    /// assert_eq!(tree.root().children().len(), 2);
    /// assert_eq!(tree.level_sizes(), vec![1, 2, 1, 1]);
    /// ```
    pub fn build(root: GameState, max_depth: Option<u32>) -> Self {
        let mut tree = Self::new(root);
        tree.expand_levels(max_depth);
        tree
    }

    /// Expand the root level by level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TreeAlreadyBuilt`] if this tree was already expanded.
    pub fn generate(&mut self, max_depth: Option<u32>) -> Result<()> {
        if self.built {
            return Err(Error::TreeAlreadyBuilt);
        }
        self.expand_levels(max_depth);
        Ok(())
    }

    fn expand_levels(&mut self, max_depth: Option<u32>) {
        let mut frontier = vec![Self::ROOT];
        let mut next_level: BTreeMap<GameState, NodeId> = BTreeMap::new();
        let mut depth = 0;

        while !frontier.is_empty() && max_depth.is_none_or(|limit| depth < limit) {
            let mut merged = 0usize;

            for &parent in &frontier {
                let state = self.nodes[parent.0].state;
                for next in expand(&state) {
                    if let Some(&existing) = next_level.get(&next) {
                        self.link(parent, existing);
                        merged += 1;
                    } else {
                        let child = self.push_child(parent, next, depth + 1);
                        next_level.insert(next, child);
                    }
                }
            }

            debug!(
                "level {}: {} nodes ({} merged transpositions)",
                depth + 1,
                next_level.len(),
                merged
            );

            frontier = next_level.values().copied().collect();
            next_level.clear();
            depth += 1;
        }

        trace!("tree complete with {} nodes", self.nodes.len());
        self.built = true;
    }

    fn push_child(&mut self, parent: NodeId, state: GameState, depth: u32) -> NodeId {
        let id = NodeId(self.nodes.len());
        let mut node = Node::new(state, depth);
        node.parents.push(parent);
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    fn link(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parents.push(parent);
    }

    /// Whether [`GameTree::generate`] (or [`GameTree::build`]) has run
    pub fn is_built(&self) -> bool {
        self.built
    }

    pub fn root(&self) -> &Node {
        &self.nodes[Self::ROOT.0]
    }

    /// Node by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
    }

    /// Total number of distinct nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree holds at least its root
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth of the deepest level
    pub fn height(&self) -> u32 {
        self.nodes.last().map_or(0, |node| node.depth)
    }

    /// Node count per depth level, starting with the root level
    pub fn level_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.height() as usize + 1];
        for node in &self.nodes {
            sizes[node.depth as usize] += 1;
        }
        sizes
    }

    /// Child of `parent` representing `state`, if any
    pub fn child_with_state(&self, parent: NodeId, state: &GameState) -> Option<NodeId> {
        self.nodes[parent.0]
            .children
            .iter()
            .copied()
            .find(|&child| self.nodes[child.0].state == *state)
    }

    /// Forget every value written by a previous search pass.
    pub fn clear_values(&mut self) {
        for node in &mut self.nodes {
            node.value = None;
        }
    }

    pub(crate) fn set_value(&mut self, id: NodeId, value: i32) {
        self.nodes[id.0].value = Some(value);
    }

    /// Id of the `index`-th child of `parent`
    pub(crate) fn child_at(&self, parent: NodeId, index: usize) -> NodeId {
        self.nodes[parent.0].children[index]
    }
}
