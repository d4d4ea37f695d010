/// Summary counts shown in the HUD.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GraphStats {
	/// Number of nodes.
	pub nodes: usize,
	/// Number of resolved edges, duplicates included.
	pub edges: usize,
	/// Connected components of the undirected graph.
	pub components: usize,
}

impl GraphStats {
	/// Computes the counts for `node_count` nodes joined by index pairs.
	pub fn compute(node_count: usize, edges: &[(usize, usize)]) -> Self {
		let mut parent: Vec<usize> = (0..node_count).collect();

		fn find(parent: &mut [usize], mut i: usize) -> usize {
			while parent[i] != i {
				parent[i] = parent[parent[i]];
				i = parent[i];
			}
			i
		}

		let mut components = node_count;
		for &(a, b) in edges {
			if a >= node_count || b >= node_count {
				continue;
			}
			let (ra, rb) = (find(&mut parent, a), find(&mut parent, b));
			if ra != rb {
				parent[ra] = rb;
				components -= 1;
			}
		}

		Self {
			nodes: node_count,
			edges: edges.len(),
			components,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn isolated_nodes_are_components() {
		let stats = GraphStats::compute(3, &[]);
		assert_eq!(stats.components, 3);
		assert_eq!(stats.edges, 0);
	}

	#[test]
	fn direction_and_duplicates_do_not_matter() {
		let stats = GraphStats::compute(5, &[(0, 1), (1, 0), (2, 1), (3, 4), (3, 4)]);
		assert_eq!(
			stats,
			GraphStats {
				nodes: 5,
				edges: 5,
				components: 2,
			}
		);
	}

	#[test]
	fn empty_graph() {
		assert_eq!(GraphStats::compute(0, &[]), GraphStats::default());
	}
}
