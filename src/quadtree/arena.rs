use derive_more::From;
use derive_more::Into;
use generational_arena::Arena;
use generational_arena::Index;

use super::node::QuadNode;

/// Identifier of a node in the tree's node table.
///
/// Ids are generational: once a node is removed, every id that referred to
/// it stops resolving, so a stale neighbor reference yields `None` on lookup
/// instead of aliasing whatever node reuses the slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, From, Into)]
pub struct NodeId(Index);

/// This simply adds a layer of type safety around the arena, making sure
/// node ids cannot be confused with raw indices from elsewhere.
#[derive(Default)]
pub(crate) struct NodeArena {
    arena: Arena<QuadNode>,
}

impl NodeArena {
    pub(crate) fn get(&self, id: NodeId) -> Option<&QuadNode> {
        self.arena.get(id.into())
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut QuadNode> {
        self.arena.get_mut(id.into())
    }

    pub(crate) fn insert(&mut self, node: QuadNode) -> NodeId {
        self.arena.insert(node).into()
    }

    pub(crate) fn remove(&mut self, id: NodeId) -> Option<QuadNode> {
        self.arena.remove(id.into())
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.arena.contains(id.into())
    }

    pub(crate) fn len(&self) -> usize {
        self.arena.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (NodeId, &QuadNode)> {
        self.arena.iter().map(|(index, node)| (index.into(), node))
    }
}

impl std::ops::Index<NodeId> for NodeArena {
    type Output = QuadNode;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.arena[id.into()]
    }
}

impl std::ops::IndexMut<NodeId> for NodeArena {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.arena[id.into()]
    }
}
