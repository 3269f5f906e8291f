use super::*;

/// Splits an undirected graph into its biconnected blocks.
pub trait BiconnectedComponents: AdjacencyList {
    /// Returns the edges of every biconnected block, each block sorted and normalized.
    /// A bridge forms a block of its own; isolated nodes belong to no block.
    /// Blocks are ordered by the time their DFS subtree is completed.
    fn biconnected_components(&self) -> Vec<Vec<Edge>>;
}

impl<G> BiconnectedComponents for G
where
    G: AdjacencyList,
{
    fn biconnected_components(&self) -> Vec<Vec<Edge>> {
        BlockSearch::new(self).compute()
    }
}

struct BlockSearch<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    nodes_info: Vec<NodeInfo>,
    time: Node,
    edge_stack: Vec<Edge>,
    blocks: Vec<Vec<Edge>>,
}

impl<'a, G> BlockSearch<'a, G>
where
    G: AdjacencyList,
{
    fn new(graph: &'a G) -> Self {
        let n = graph.number_of_nodes();
        Self {
            graph,
            visited: NodeBitSet::new(n),
            nodes_info: vec![NodeInfo::default(); n as usize],
            time: 0,
            edge_stack: Vec::new(),
            blocks: Vec::new(),
        }
    }

    fn compute(mut self) -> Vec<Vec<Edge>> {
        for u in self.graph.vertices_with_neighbors() {
            if self.visited.set_bit(u) {
                continue;
            }

            self.compute_from(u);
        }

        self.blocks
    }

    /// Iterative version of the low-link search to not overflow the call stack on long paths
    fn compute_from(&mut self, root: Node) {
        let graph = self.graph;
        self.discover(INVALID_NODE, root);
        let mut stack = vec![(root, graph.neighbors_of(root))];

        while let Some((u, neighbors)) = stack.last_mut() {
            let u = *u;

            if let Some(v) = neighbors.next() {
                if !self.visited.set_bit(v) {
                    self.discover(u, v);
                    self.edge_stack.push(Edge(u, v));
                    stack.push((v, graph.neighbors_of(v)));
                } else if v != self.nodes_info[u as usize].parent
                    && self.nodes_info[v as usize].discovery < self.nodes_info[u as usize].discovery
                {
                    // back edge towards an ancestor
                    self.edge_stack.push(Edge(u, v));
                    let v_disc = self.nodes_info[v as usize].discovery;
                    self.nodes_info[u as usize].update_low(v_disc);
                }
                continue;
            }

            stack.pop();
            let Some(&(parent, _)) = stack.last() else {
                continue;
            };

            let low_u = self.nodes_info[u as usize].low;
            self.nodes_info[parent as usize].update_low(low_u);

            if low_u >= self.nodes_info[parent as usize].discovery {
                self.close_block(Edge(parent, u));
            }
        }
    }

    fn discover(&mut self, parent: Node, u: Node) {
        self.time += 1;
        self.nodes_info[u as usize] = NodeInfo {
            parent,
            discovery: self.time,
            low: self.time,
        };
    }

    /// Pops all edges up to and including the tree edge `last` into a new block
    fn close_block(&mut self, last: Edge) {
        let mut block = Vec::new();
        while let Some(edge) = self.edge_stack.pop() {
            block.push(edge.normalized());
            if edge == last {
                break;
            }
        }

        block.sort_unstable();
        self.blocks.push(block);
    }
}

#[derive(Clone, Copy, Default)]
struct NodeInfo {
    low: Node,
    discovery: Node,
    parent: Node,
}

impl NodeInfo {
    fn update_low(&mut self, value: Node) {
        self.low = self.low.min(value);
    }
}
