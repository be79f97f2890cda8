use std::fmt::{self, Debug};

use super::sequence::{Bidirectional, BidirectionalSequence, ForwardSequence};

/// A doubly linked list whose nodes live in one arena.
///
/// The list order is held by the links, not by the arena order, so a [`Node`] can only be reached
/// by walking from a neighbour. That makes the list a [`BidirectionalSequence`] without random
/// access, which is what the non random access strategies of the sorters are written for.
///
/// # Usage
///```
/// use orst_algos::orst::{HeapSorter, List, Sorter};
///
/// let mut list = List::new();
/// list.push_back(2);
/// list.push_front(3);
/// list.push_back(1);
///
/// HeapSorter.sort(&mut list);
/// assert_eq!(list.into_vec(), [1, 2, 3]);
///```
pub struct List<T> {
    values: Vec<T>,
    links: Vec<Link>,
    head: Option<usize>,
    tail: Option<usize>,
}

#[derive(Debug, Clone, Copy)]
struct Link {
    prev: Option<usize>,
    next: Option<usize>,
}

/// Position of a [`List`]. The past-the-end node holds no slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node(Option<usize>);

impl<T> List<T> {
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            links: Vec::new(),
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn push_back(&mut self, value: T) {
        let slot = self.values.len();
        self.values.push(value);
        self.links.push(Link {
            prev: self.tail,
            next: None,
        });

        match self.tail {
            Some(tail) => self.links[tail].next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
    }

    pub fn push_front(&mut self, value: T) {
        let slot = self.values.len();
        self.values.push(value);
        self.links.push(Link {
            prev: None,
            next: self.head,
        });

        match self.head {
            Some(head) => self.links[head].prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
    }

    /// Iterates the elements in list order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    /// Consumes the list, returning its elements in list order.
    pub fn into_vec(self) -> Vec<T> {
        let mut slots: Vec<Option<T>> = self.values.into_iter().map(Some).collect();
        let mut ordered = Vec::with_capacity(slots.len());

        let mut current = self.head;
        while let Some(slot) = current {
            if let Some(value) = slots[slot].take() {
                ordered.push(value);
            }
            current = self.links[slot].next;
        }
        ordered
    }

    fn slot(node: Node) -> usize {
        match node.0 {
            Some(slot) => slot,
            None => panic!("the past-the-end node of a list holds no element"),
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the elements of a [`List`], see [`List::iter`].
pub struct Iter<'a, T> {
    list: &'a List<T>,
    current: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.current?;
        self.current = self.list.links[slot].next;
        Some(&self.list.values[slot])
    }
}

impl<T> ForwardSequence for List<T> {
    type Item = T;
    type Position = Node;
    type Capability = Bidirectional;

    fn begin(&self) -> Node {
        Node(self.head)
    }

    fn end(&self) -> Node {
        Node(None)
    }

    fn next(&self, pos: Node) -> Node {
        Node(self.links[Self::slot(pos)].next)
    }

    fn element(&self, pos: Node) -> &T {
        &self.values[Self::slot(pos)]
    }

    fn element_mut(&mut self, pos: Node) -> &mut T {
        &mut self.values[Self::slot(pos)]
    }

    fn swap_elements(&mut self, a: Node, b: Node) {
        self.values.swap(Self::slot(a), Self::slot(b))
    }
}

impl<T> BidirectionalSequence for List<T> {
    fn prev(&self, pos: Node) -> Node {
        match pos.0 {
            Some(slot) => Node(self.links[slot].prev),
            None => Node(self.tail),
        }
    }
}
