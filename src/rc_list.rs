use std::cell::RefCell;
use std::rc::Rc;

/// A possibly-empty chain of shared-ownership nodes.
pub type Link<T> = Option<Rc<ListNode<T>>>;

/// Element of a singly linked list with reference-counted nodes.
///
/// Several owners can hold the same node at once (a list head plus the
/// result of [`find_value`], say); a node is freed when the last owner lets
/// go. A singly linked list cannot form a cycle, so plain `Rc` is enough.
#[derive(Debug)]
pub struct ListNode<T> {
    data: T,
    next: RefCell<Link<T>>,
}

impl<T> ListNode<T> {
    fn new(data: T, next: Link<T>) -> Rc<Self> {
        Rc::new(Self {
            data,
            next: RefCell::new(next),
        })
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    /// A shared handle to the following node, if any.
    pub fn next(&self) -> Link<T> {
        self.next.borrow().clone()
    }
}

/// Prepends a new node holding `value`.
pub fn push_front<T>(head: &mut Link<T>, value: T) {
    *head = Some(ListNode::new(value, head.take()));
}

/// Appends a new node holding `value` after the current tail.
pub fn push_back<T>(head: &mut Link<T>, value: T) {
    let node = ListNode::new(value, None);
    match head {
        None => *head = Some(node),
        Some(first) => {
            let mut tail = Rc::clone(first);
            loop {
                let next = tail.next.borrow().clone();
                match next {
                    Some(n) => tail = n,
                    None => break,
                }
            }
            *tail.next.borrow_mut() = Some(node);
        }
    }
}

/// Number of nodes reachable from `head`.
pub fn count<T>(head: &Link<T>) -> usize {
    let mut n = 0;
    let mut cursor = head.clone();
    while let Some(node) = cursor {
        n += 1;
        cursor = node.next.borrow().clone();
    }
    n
}

/// Walks the list looking for `needle`; returns a shared handle to the
/// first node holding it, or `None`.
pub fn find_value<T: PartialEq>(head: &Link<T>, needle: &T) -> Link<T> {
    let mut cursor = head.clone();
    while let Some(node) = cursor {
        if node.data == *needle {
            return Some(node);
        }
        cursor = node.next.borrow().clone();
    }
    None
}

/// Removes and returns the first node; `None` on an empty list.
///
/// The removed node's `next` link is cleared so holding on to it does not
/// keep the rest of the list alive.
pub fn pop_front<T>(head: &mut Link<T>) -> Link<T> {
    let first = head.take()?;
    *head = first.next.borrow_mut().take();
    Some(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(values: &[u32]) -> Link<u32> {
        let mut head = None;
        for value in values.iter().rev() {
            push_front(&mut head, *value);
        }
        head
    }

    fn collect(head: &Link<u32>) -> Vec<u32> {
        let mut out = Vec::new();
        let mut cursor = head.clone();
        while let Some(node) = cursor {
            out.push(*node.data());
            cursor = node.next();
        }
        out
    }

    #[test]
    fn push_front_prepends() {
        let mut head = None;
        push_front(&mut head, 3);
        push_front(&mut head, 2);
        push_front(&mut head, 1);
        assert_eq!(collect(&head), vec![1, 2, 3]);
    }

    #[test]
    fn push_back_appends() {
        let mut head = None;
        push_back(&mut head, 1);
        push_back(&mut head, 2);
        push_back(&mut head, 3);
        assert_eq!(collect(&head), vec![1, 2, 3]);
    }

    #[test]
    fn count_walks_the_whole_list() {
        assert_eq!(count::<u32>(&None), 0);
        assert_eq!(count(&list_of(&[10])), 1);
        assert_eq!(count(&list_of(&[10, 20, 30, 40])), 4);
    }

    #[test]
    fn find_value_hits_and_misses() {
        let head = list_of(&[10, 20, 30]);
        let found = find_value(&head, &20).unwrap();
        assert_eq!(*found.data(), 20);
        assert!(find_value(&head, &99).is_none());
    }

    #[test]
    fn found_node_shares_ownership_with_the_list() {
        let head = list_of(&[10, 20, 30]);
        let found = find_value(&head, &10).unwrap();
        // The head and the search result own the same node.
        assert_eq!(Rc::strong_count(&found), 2);
    }

    #[test]
    fn pop_front_returns_detached_node() {
        let mut head = list_of(&[1, 2, 3]);
        let removed = pop_front(&mut head).unwrap();
        assert_eq!(*removed.data(), 1);
        assert!(removed.next().is_none(), "removed node must be detached");
        assert_eq!(collect(&head), vec![2, 3]);
    }

    #[test]
    fn pop_front_on_empty_list_is_none() {
        let mut head: Link<u32> = None;
        assert!(pop_front(&mut head).is_none());
    }

    #[test]
    fn popped_node_does_not_keep_tail_alive() {
        let mut head = list_of(&[1, 2]);
        let second = find_value(&head, &2).unwrap();
        let _removed = pop_front(&mut head).unwrap();
        pop_front(&mut head);
        // Only `second` owns the node now; the popped head released it.
        assert_eq!(Rc::strong_count(&second), 1);
    }
}
