/*!
  A bump arena over a single region of linear memory.

  Allocation carves `size` bytes at the cursor and moves the cursor forward. There is no way to
  free one allocation; `reset_all` rewinds the cursor to the base and ends the life of everything
  allocated since the last reset. A `Region` mutably borrows its arena, so the borrow checker
  rejects a reset while any region is still alive.

  Addresses are linear-memory addresses: the arena's base plus the region's offset in the backing
  store. The backing store grows on demand, so allocation never fails for lack of room.
*/

use std::ops::{Deref, DerefMut};

/// Base address used by `Arena::new`.
pub const DEFAULT_ARENA_BASE: usize = 0;

#[derive(Debug)]
pub struct Arena {
  base   : usize,
  memory : Vec<u8>,
  cursor : usize, // Offset of the next free byte in `memory`
}

impl Default for Arena {
  fn default() -> Self {
    Arena::new()
  }
}

impl Arena {

  pub fn new() -> Arena {
    Arena::with_base(DEFAULT_ARENA_BASE)
  }

  pub fn with_base(base: usize) -> Arena {
    Arena::with_capacity(base, 0)
  }

  /// Creates an arena whose backing store is preallocated to `capacity` bytes.
  pub fn with_capacity(base: usize, capacity: usize) -> Arena {
    Arena {
      base,
      memory: Vec::with_capacity(capacity),
      cursor: 0
    }
  }

  /**
    Returns `size` zeroed bytes at the cursor and advances the cursor past them. Bytes written
    before a `reset_all` are zeroed again here, so callers can rely on fresh allocations being
    zero.
  */
  pub fn allocate(&mut self, size: usize) -> Region<'_> {
    let start = self.cursor;
    let end   = start + size;
    self.cursor = end;

    if end > self.memory.len() {
      self.memory.resize(end, 0);
    }

    let bytes = &mut self.memory[start..end];
    bytes.fill(0);

    Region {
      address: self.base + start,
      bytes
    }
  }

  /// Rewinds the cursor to the base. Every previous allocation is dead after this.
  pub fn reset_all(&mut self) {
    self.cursor = 0;
  }

  pub fn base(&self) -> usize {
    self.base
  }

  /// Address of the next byte `allocate` will hand out.
  pub fn cursor(&self) -> usize {
    self.base + self.cursor
  }

  /// Bytes handed out since the last reset.
  pub fn allocated(&self) -> usize {
    self.cursor
  }
}

/// A zero-initialized block of arena memory.
#[derive(Debug)]
pub struct Region<'a> {
  address : usize,
  bytes   : &'a mut [u8],
}

impl<'a> Region<'a> {
  pub fn address(&self) -> usize {
    self.address
  }

  /// Gives up the address and keeps the bytes for the rest of the borrow.
  pub fn into_bytes(self) -> &'a mut [u8] {
    self.bytes
  }
}

impl<'a> Deref for Region<'a> {
  type Target = [u8];

  fn deref(&self) -> &[u8] {
    self.bytes
  }
}

impl<'a> DerefMut for Region<'a> {
  fn deref_mut(&mut self) -> &mut [u8] {
    self.bytes
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn allocations_are_contiguous() {
    let mut arena = Arena::with_base(1024);
    let first = arena.allocate(16).address();
    let second = arena.allocate(8).address();
    let third = arena.allocate(0).address();
    assert_eq!(first, 1024);
    assert_eq!(second, 1040);
    assert_eq!(third, 1048);
    assert_eq!(arena.cursor(), 1048);
    assert_eq!(arena.allocated(), 24);
  }

  #[test]
  fn allocation_has_exact_size_and_is_zeroed() {
    let mut arena = Arena::new();
    let region = arena.allocate(32);
    assert_eq!(region.len(), 32);
    assert!(region.iter().all(|byte| *byte == 0));
  }

  #[test]
  fn reset_returns_to_base_with_zeroed_bytes() {
    let mut arena = Arena::with_base(64);
    let initial = {
      let mut region = arena.allocate(10);
      for byte in region.iter_mut() {
        *byte = 0xAB;
      }
      region.address()
    };
    arena.allocate(100);

    arena.reset_all();
    assert_eq!(arena.cursor(), arena.base());
    assert_eq!(arena.allocated(), 0);

    let region = arena.allocate(10);
    assert_eq!(region.address(), initial);
    assert!(region.iter().all(|byte| *byte == 0));
  }

  #[test]
  fn repeated_resets_are_idempotent() {
    let mut arena = Arena::new();
    arena.allocate(5);
    arena.reset_all();
    arena.reset_all();
    assert_eq!(arena.allocate(5).address(), DEFAULT_ARENA_BASE);
  }

  #[test]
  fn preallocated_capacity_does_not_move_the_cursor() {
    let mut arena = Arena::with_capacity(0, 4096);
    assert_eq!(arena.allocated(), 0);
    let region = arena.allocate(2000).into_bytes();
    assert_eq!(region.len(), 2000);
  }
}
