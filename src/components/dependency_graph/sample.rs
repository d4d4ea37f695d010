//! Showcase dataset: a small AWS web stack as `tfgraph` would report it.

use super::types::{GraphData, GraphEdge, GraphNode, NodeState as S, NodeType as T};

struct Row {
	id: &'static str,
	label: &'static str,
	kind: T,
	state: S,
}

const fn row(id: &'static str, kind: T, state: S) -> Row {
	labelled(id, id, kind, state)
}

const fn labelled(id: &'static str, label: &'static str, kind: T, state: S) -> Row {
	Row {
		id,
		label,
		kind,
		state,
	}
}

const NODES: &[Row] = &[
	labelled(
		"provider.aws",
		"provider[\"registry.terraform.io/hashicorp/aws\"]",
		T::Provider,
		S::External,
	),
	row("var.region", T::Variable, S::Healthy),
	row("var.environment", T::Variable, S::Healthy),
	row("var.instance_type", T::Variable, S::Healthy),
	row("var.legacy_ami", T::Variable, S::Unused),
	row("data.aws_ami.ubuntu", T::Data, S::Healthy),
	row("data.aws_availability_zones.available", T::Data, S::Healthy),
	labelled("module.vpc", "module.vpc (terraform-aws-modules/vpc/aws)", T::Module, S::Healthy),
	labelled("module.rds", "module.rds (terraform-aws-modules/rds/aws)", T::Module, S::Warning),
	row("aws_security_group.web", T::Resource, S::Healthy),
	row("aws_security_group.db", T::Resource, S::Healthy),
	row("aws_instance.web", T::Resource, S::Healthy),
	row("aws_lb.web", T::Resource, S::Healthy),
	row("aws_lb_target_group.web", T::Resource, S::Healthy),
	row("aws_s3_bucket.assets", T::Resource, S::Leaf),
	row("aws_cloudwatch_log_group.old", T::Resource, S::Orphan),
	row("output.lb_dns_name", T::Output, S::Leaf),
	row("output.db_endpoint", T::Output, S::Leaf),
	row("output.assets_bucket", T::Output, S::Leaf),
];

const EDGES: &[(&str, &str)] = &[
	("module.vpc", "var.region"),
	("module.vpc", "var.environment"),
	("module.vpc", "data.aws_availability_zones.available"),
	("data.aws_availability_zones.available", "provider.aws"),
	("data.aws_ami.ubuntu", "provider.aws"),
	("aws_security_group.web", "module.vpc"),
	("aws_security_group.db", "module.vpc"),
	("aws_security_group.db", "aws_security_group.web"),
	("module.rds", "module.vpc"),
	("module.rds", "aws_security_group.db"),
	("module.rds", "var.environment"),
	("aws_instance.web", "data.aws_ami.ubuntu"),
	("aws_instance.web", "var.instance_type"),
	("aws_instance.web", "aws_security_group.web"),
	("aws_instance.web", "module.vpc"),
	("aws_lb.web", "module.vpc"),
	("aws_lb.web", "aws_security_group.web"),
	("aws_lb_target_group.web", "aws_lb.web"),
	("aws_lb_target_group.web", "aws_instance.web"),
	("aws_s3_bucket.assets", "var.environment"),
	("output.lb_dns_name", "aws_lb.web"),
	("output.db_endpoint", "module.rds"),
	("output.assets_bucket", "aws_s3_bucket.assets"),
];

/// Builds the showcase graph, deriving dependency counts from the edge list.
pub fn showcase_graph() -> GraphData {
	let nodes = NODES
		.iter()
		.map(|row| {
			let incoming = EDGES.iter().filter(|(_, target)| *target == row.id).count();
			let outgoing = EDGES.iter().filter(|(source, _)| *source == row.id).count();
			GraphNode::new(
				row.id,
				row.label,
				row.kind,
				row.state,
				incoming as u32,
				outgoing as u32,
			)
		})
		.collect();
	let edges = EDGES
		.iter()
		.map(|&(source, target)| GraphEdge::new(source, target))
		.collect();

	GraphData { nodes, edges }
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn every_edge_references_a_node() {
		let data = showcase_graph();
		let ids: HashSet<_> = data.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids.len(), data.nodes.len(), "node ids must be unique");
		for edge in &data.edges {
			assert!(ids.contains(edge.source.as_str()), "{}", edge.source);
			assert!(ids.contains(edge.target.as_str()), "{}", edge.target);
		}
	}

	#[test]
	fn counts_match_edges() {
		let data = showcase_graph();
		let total_in: u32 = data.nodes.iter().map(|n| n.dependencies_in).sum();
		let total_out: u32 = data.nodes.iter().map(|n| n.dependencies_out).sum();
		assert_eq!(total_in as usize, data.edges.len());
		assert_eq!(total_out as usize, data.edges.len());

		let orphan = data
			.nodes
			.iter()
			.find(|n| n.state == S::Orphan)
			.unwrap();
		assert_eq!(orphan.degree(), 0);
	}

	#[test]
	fn labels_default_to_ids() {
		let data = showcase_graph();
		let label = |id: &str| {
			data.nodes
				.iter()
				.find(|n| n.id == id)
				.map(|n| n.label.as_str())
		};
		assert_eq!(label("var.region"), Some("var.region"));
		assert_eq!(
			label("module.vpc"),
			Some("module.vpc (terraform-aws-modules/vpc/aws)")
		);
		assert_eq!(
			label("provider.aws"),
			Some("provider[\"registry.terraform.io/hashicorp/aws\"]")
		);
	}
}
