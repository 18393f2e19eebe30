/// An owning link: each node is owned either by its predecessor's `next` or, for the
/// head, by the list itself.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}
