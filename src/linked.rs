// Copyright 2022 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Doubly linked storage for the pointer-walking representation.

use crate::sequence::Sequence;

const NIL: usize = usize::MAX;

#[derive(Clone, Debug)]
struct Node<T> {
    value: T,
    prev: usize,
    next: usize,
}

/// Arena-backed doubly linked list.
///
/// Nodes live in a `Vec` and link to each other by slot index, `NIL` marking
/// either end. Slots freed by `pop_back` are reused by the next allocation.
/// Positional lookups walk the links from whichever end is closer.
#[derive(Clone, Debug)]
pub struct LinkedSeq<T> {
    nodes: Vec<Node<T>>,
    free: Vec<usize>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> Default for LinkedSeq<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }
}

impl<T: Copy> LinkedSeq<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates the values front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    fn alloc(&mut self, value: T) -> usize {
        let node = Node {
            value,
            prev: NIL,
            next: NIL,
        };

        if let Some(i) = self.free.pop() {
            self.nodes[i] = node;
            i
        } else {
            self.nodes.push(node);
            self.nodes.len() - 1
        }
    }

    /// Links the detached node `i` in front of `before`, or at the tail if
    /// `before` is `NIL`.
    fn link_before(&mut self, before: usize, i: usize) {
        let prev = if before == NIL {
            self.tail
        } else {
            self.nodes[before].prev
        };

        self.nodes[i].prev = prev;
        self.nodes[i].next = before;

        if prev == NIL {
            self.head = i;
        } else {
            self.nodes[prev].next = i;
        }

        if before == NIL {
            self.tail = i;
        } else {
            self.nodes[before].prev = i;
        }

        self.len += 1;
    }

    fn unlink(&mut self, i: usize) {
        let Node { prev, next, .. } = self.nodes[i];

        if prev == NIL {
            self.head = next;
        } else {
            self.nodes[prev].next = next;
        }

        if next == NIL {
            self.tail = prev;
        } else {
            self.nodes[next].prev = prev;
        }

        self.nodes[i].prev = NIL;
        self.nodes[i].next = NIL;
        self.len -= 1;
    }

    fn node_at(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }

        let mut cursor;

        if index < self.len / 2 {
            cursor = self.head;
            for _ in 0..index {
                cursor = self.nodes[cursor].next;
            }
        } else {
            cursor = self.tail;
            for _ in index + 1..self.len {
                cursor = self.nodes[cursor].prev;
            }
        }

        Some(cursor)
    }
}

impl<T: Copy> Sequence<T> for LinkedSeq<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn push_back(&mut self, value: T) {
        let i = self.alloc(value);
        self.link_before(NIL, i);
    }

    fn pop_back(&mut self) -> Option<T> {
        if self.tail == NIL {
            return None;
        }

        let i = self.tail;
        self.unlink(i);
        self.free.push(i);

        Some(self.nodes[i].value)
    }

    fn back(&self) -> Option<T> {
        (self.tail != NIL).then(|| self.nodes[self.tail].value)
    }

    fn at(&self, index: usize) -> Option<T> {
        self.node_at(index).map(|i| self.nodes[i].value)
    }

    fn reorder_by_key<K, F>(&mut self, mut key: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let mut order = Vec::with_capacity(self.len);
        let mut cursor = self.head;

        while cursor != NIL {
            order.push(cursor);
            cursor = self.nodes[cursor].next;
        }

        order.sort_by_key(|&i| key(&self.nodes[i].value));

        let mut prev = NIL;
        for &i in &order {
            self.nodes[i].prev = prev;
            if prev != NIL {
                self.nodes[prev].next = i;
            }
            prev = i;
        }

        if let (Some(&first), Some(&last)) = (order.first(), order.last()) {
            self.nodes[last].next = NIL;
            self.head = first;
            self.tail = last;
        }
    }

    fn insert_sorted(&mut self, value: T)
    where
        T: Ord,
    {
        let mut cursor = self.head;

        while cursor != NIL && self.nodes[cursor].value <= value {
            cursor = self.nodes[cursor].next;
        }

        let i = self.alloc(value);
        self.link_before(cursor, i);
    }

    fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.iter()
    }
}

impl<T: Copy> FromIterator<T> for LinkedSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();

        for val in iter {
            list.push_back(val);
        }

        list
    }
}

/// Front-to-back iterator over a [`LinkedSeq`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    list: &'a LinkedSeq<T>,
    cursor: usize,
}

impl<T: Copy> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.cursor == NIL {
            return None;
        }

        let node = &self.list.nodes[self.cursor];
        self.cursor = node.next;

        Some(node.value)
    }
}
