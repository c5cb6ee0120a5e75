use bytes::Bytes;

enum Node {
    Byte(u8),
    Leaf(Bytes),
    Branch(BytesTree),
}

/// An append-only tree of byte fragments.
///
/// Nested encoders append whole subtrees, so nothing is copied until
/// [`BytesTree::flatten`] concatenates every fragment, in append order, into
/// one allocation of the exact final size.
///
/// ```text
/// BytesTree [
///     Byte(0x01),
///     Leaf([u8; 20]),
///     Branch(BytesTree [ Byte(0xFF), ... ]),
///     ...
/// ]
/// ```
#[derive(Default)]
pub struct BytesTree {
    nodes: Vec<Node>,
    len: usize,
}

impl BytesTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_byte(&mut self, b: u8) {
        self.nodes.push(Node::Byte(b));
        self.len += 1;
    }

    pub fn append(&mut self, buf: &[u8]) {
        self.append_bytes(Bytes::copy_from_slice(buf));
    }

    pub fn append_bytes(&mut self, buf: Bytes) {
        if buf.is_empty() {
            return;
        }
        self.len += buf.len();
        self.nodes.push(Node::Leaf(buf));
    }

    pub fn append_tree(&mut self, tree: BytesTree) {
        if tree.is_empty() {
            return;
        }
        self.len += tree.len;
        self.nodes.push(Node::Branch(tree));
    }

    /// Total byte count of all fragments, including nested subtrees.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn flatten(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len);
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(&self, out: &mut Vec<u8>) {
        for node in self.nodes.iter() {
            match node {
                Node::Byte(b) => out.push(*b),
                Node::Leaf(buf) => out.extend_from_slice(buf),
                Node::Branch(tree) => tree.flatten_into(out),
            }
        }
    }
}
