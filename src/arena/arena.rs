use std::mem::size_of;

use bumpalo::{collections::Vec as BumpVec, Bump};
use tracing::debug;

use crate::{
    config::DEFAULT_CAPACITY,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Token,
};

/// One parsed token plus its backward link.
///
/// `link` is the index of the node that opened the innermost production this
/// node belongs to. It is never greater than the node's own index; a node
/// whose link equals its index opens a production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node<'src> {
    pub token: Token<'src>,
    pub link: usize,
}

/// Bump allocation backing one or more arenas.
///
/// Dropping the region (or calling [`Region::release`]) frees every node at
/// once. Arenas borrow the region, so none can outlive it.
pub struct Region {
    bump: Bump,
    capacity: usize,
}

impl Region {
    /// Reserves room for `capacity` nodes.
    pub fn allocate(capacity: usize) -> Result<Region, Error> {
        let failed = || Error::new(ErrorImpl::AllocationFailed { capacity }, 0, 0);

        let bytes = capacity
            .checked_mul(size_of::<Node<'static>>())
            .ok_or_else(failed)?;
        let bump = Bump::try_with_capacity(bytes).map_err(|_| failed())?;

        debug!(capacity, bytes, "allocated node region");
        Ok(Region { bump, capacity })
    }

    /// Reserves [`DEFAULT_CAPACITY`] nodes.
    pub fn allocate_default() -> Result<Region, Error> {
        Region::allocate(DEFAULT_CAPACITY)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// An empty arena holding up to [`Region::capacity`] nodes.
    pub fn arena<'bump, 'src: 'bump>(&'bump self) -> Arena<'bump, 'src> {
        Arena {
            nodes: BumpVec::with_capacity_in(self.capacity, &self.bump),
            capacity: self.capacity,
        }
    }

    /// Frees every arena carved from this region, keeping the memory for reuse.
    pub fn reset(&mut self) {
        self.bump.reset();
    }

    /// Bytes currently handed out by the region.
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }

    pub fn release(self) {
        debug!(capacity = self.capacity, "released node region");
    }
}

/// Fixed-capacity node store.
pub struct Arena<'bump, 'src> {
    nodes: BumpVec<'bump, Node<'src>>,
    capacity: usize,
}

impl<'bump, 'src> Arena<'bump, 'src> {
    /// Appends a node and returns its index.
    ///
    /// Fails with `ArenaExhausted` once `capacity` nodes are stored; the
    /// arena is left unchanged in that case.
    pub fn push(&mut self, token: Token<'src>, link: usize) -> Result<usize, Error> {
        let index = self.nodes.len();
        if index >= self.capacity {
            return Err(Error::new(
                ErrorImpl::ArenaExhausted {
                    capacity: self.capacity,
                },
                token.span.offset,
                token.span.len(),
            ));
        }

        debug_assert!(link <= index, "link {} points past node {}", link, index);
        self.nodes.push(Node { token, link });
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.nodes.len()
    }

    pub fn nodes(&self) -> &[Node<'src>] {
        &self.nodes
    }

    pub fn get(&self, index: usize) -> Option<&Node<'src>> {
        self.nodes.get(index)
    }

    pub fn last(&self) -> Option<&Node<'src>> {
        self.nodes.last()
    }

    /// Drops every node, keeping the reserved capacity.
    pub fn reset(&mut self) {
        self.nodes.clear();
    }

    /// Walks links from `index` back to the node that opened its chain.
    ///
    /// Yields `index` first and the self-linked root last.
    pub fn chain(&self, index: usize) -> Chain<'_, 'src> {
        Chain {
            nodes: self.nodes(),
            next: (index < self.nodes.len()).then_some(index),
        }
    }
}

pub struct Chain<'a, 'src> {
    nodes: &'a [Node<'src>],
    next: Option<usize>,
}

impl Iterator for Chain<'_, '_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let index = self.next?;
        let link = self.nodes[index].link;
        self.next = (link < index).then_some(link);
        Some(index)
    }
}
