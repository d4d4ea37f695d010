//! Force-directed layout in the style of d3-force.
//!
//! Each tick cools `alpha` toward `alpha_target`, applies the link, many-body,
//! centering and collision forces in that order, then integrates velocities
//! with a constant decay. Pinned nodes are held at their pin.

use std::f64::consts::PI;

use super::types::{NodeState, Point};

const INITIAL_RADIUS: f64 = 10.0;
const DISTANCE_MIN_SQ: f64 = 1.0;

/// Tunable force constants. The defaults are hand-tuned for graphs of a few
/// dozen nodes in a viewport of roughly 800x600.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForceConfig {
	/// Rest length of every link.
	pub link_distance: f64,
	/// Spring strength of every link.
	pub link_strength: f64,
	/// Base many-body strength; negative values repel.
	pub charge_base: f64,
	/// Charge multiplier added per unit of degree.
	pub charge_per_degree: f64,
	/// Upper bound of the degree multiplier.
	pub charge_max_multiplier: f64,
	/// Charge factor for healthy nodes.
	pub healthy_charge_factor: f64,
	/// Charge factor for unused nodes.
	pub unused_charge_factor: f64,
	/// Strength of the pull toward the viewport center.
	pub center_strength: f64,
	/// Strength of overlap resolution.
	pub collision_strength: f64,
	/// Space kept between node circles.
	pub collision_padding: f64,
	/// Alpha below which the simulation is considered settled.
	pub alpha_min: f64,
	/// Fraction of the remaining distance to `alpha_target` covered per tick.
	pub alpha_decay: f64,
	/// Fraction of velocity lost per tick.
	pub velocity_decay: f64,
	/// Alpha target held while a node is being dragged.
	pub drag_alpha_target: f64,
	/// Alpha applied when physics is resumed.
	pub resume_alpha: f64,
}

impl Default for ForceConfig {
	fn default() -> Self {
		let alpha_min = 0.001_f64;
		Self {
			link_distance: 120.0,
			link_strength: 0.2,
			charge_base: -300.0,
			charge_per_degree: 0.1,
			charge_max_multiplier: 6.0,
			healthy_charge_factor: 1.3,
			unused_charge_factor: 0.5,
			center_strength: 0.1,
			collision_strength: 0.8,
			collision_padding: 4.0,
			alpha_min,
			alpha_decay: 1.0 - alpha_min.powf(1.0 / 300.0),
			velocity_decay: 0.4,
			drag_alpha_target: 0.3,
			resume_alpha: 0.3,
		}
	}
}

impl ForceConfig {
	/// Many-body strength for a node with the given state and degree.
	pub fn charge_for(&self, state: NodeState, degree: u32) -> f64 {
		let multiplier =
			(1.0 + f64::from(degree) * self.charge_per_degree).min(self.charge_max_multiplier);
		let factor = match state {
			NodeState::Healthy => self.healthy_charge_factor,
			NodeState::Unused => self.unused_charge_factor,
			NodeState::External | NodeState::Leaf | NodeState::Orphan | NodeState::Warning => 1.0,
		};
		self.charge_base * multiplier * factor
	}
}

/// Per-node inputs to the simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimNodeSpec {
	/// Visual radius; collision adds padding on top.
	pub radius: f64,
	/// Many-body strength.
	pub charge: f64,
}

#[derive(Clone, Debug)]
struct SimNode {
	x: f64,
	y: f64,
	vx: f64,
	vy: f64,
	fx: Option<f64>,
	fy: Option<f64>,
	collide_radius: f64,
	charge: f64,
}

#[derive(Clone, Copy, Debug)]
struct Link {
	source: usize,
	target: usize,
	bias: f64,
}

/// Linear congruential generator matching the one d3 seeds with 1.
#[derive(Clone, Debug)]
struct Lcg(u32);

impl Lcg {
	fn next(&mut self) -> f64 {
		self.0 = self.0.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
		f64::from(self.0) / 4_294_967_296.0
	}

	fn jiggle(&mut self) -> f64 {
		(self.next() - 0.5) * 1e-6
	}
}

/// A running force layout over a fixed node and link set.
#[derive(Clone, Debug)]
pub struct Simulation {
	nodes: Vec<SimNode>,
	links: Vec<Link>,
	center: Point,
	alpha: f64,
	alpha_target: f64,
	config: ForceConfig,
	random: Lcg,
}

impl Simulation {
	/// Places nodes on a phyllotaxis spiral around `center` and prepares the
	/// links. Self-loops and out-of-range links are ignored by the forces.
	pub fn new(
		specs: &[SimNodeSpec],
		links: &[(usize, usize)],
		config: ForceConfig,
		center: Point,
	) -> Self {
		let golden_angle = PI * (3.0 - 5.0_f64.sqrt());
		let nodes = specs
			.iter()
			.enumerate()
			.map(|(i, spec)| {
				let radius = INITIAL_RADIUS * (0.5 + i as f64).sqrt();
				let angle = i as f64 * golden_angle;
				SimNode {
					x: center.x + radius * angle.cos(),
					y: center.y + radius * angle.sin(),
					vx: 0.0,
					vy: 0.0,
					fx: None,
					fy: None,
					collide_radius: spec.radius + config.collision_padding,
					charge: spec.charge,
				}
			})
			.collect::<Vec<_>>();

		let usable = |&&(s, t): &&(usize, usize)| s != t && s < nodes.len() && t < nodes.len();
		let mut counts = vec![0_u32; nodes.len()];
		for &(s, t) in links.iter().filter(usable) {
			counts[s] += 1;
			counts[t] += 1;
		}
		let links = links
			.iter()
			.filter(usable)
			.map(|&(source, target)| Link {
				source,
				target,
				bias: f64::from(counts[source]) / f64::from(counts[source] + counts[target]),
			})
			.collect();

		Self {
			nodes,
			links,
			center,
			alpha: 1.0,
			alpha_target: 0.0,
			config,
			random: Lcg(1),
		}
	}

	/// Current energy.
	pub fn alpha(&self) -> f64 {
		self.alpha
	}

	/// Sets the energy directly, as a restart pulse.
	pub fn set_alpha(&mut self, alpha: f64) {
		self.alpha = alpha.clamp(0.0, 1.0);
	}

	/// Sets the energy the simulation cools toward.
	pub fn set_alpha_target(&mut self, target: f64) {
		self.alpha_target = target.clamp(0.0, 1.0);
	}

	/// Whether ticking still moves nodes meaningfully.
	pub fn is_hot(&self) -> bool {
		self.alpha >= self.config.alpha_min || self.alpha_target > 0.0
	}

	/// Moves the centering target.
	pub fn set_center(&mut self, center: Point) {
		self.center = center;
	}

	/// Position of node `index`.
	pub fn position(&self, index: usize) -> Option<Point> {
		self.nodes.get(index).map(|n| Point::new(n.x, n.y))
	}

	#[cfg(test)]
	fn positions(&self) -> Vec<Point> {
		self.nodes.iter().map(|n| Point::new(n.x, n.y)).collect()
	}

	/// Fixes node `index` at `at`, effective immediately.
	pub fn pin(&mut self, index: usize, at: Point) {
		if let Some(node) = self.nodes.get_mut(index) {
			node.fx = Some(at.x);
			node.fy = Some(at.y);
			node.x = at.x;
			node.y = at.y;
			node.vx = 0.0;
			node.vy = 0.0;
		}
	}

	/// Releases node `index` back to the forces.
	pub fn unpin(&mut self, index: usize) {
		if let Some(node) = self.nodes.get_mut(index) {
			node.fx = None;
			node.fy = None;
		}
	}

	/// Whether node `index` is pinned.
	pub fn is_pinned(&self, index: usize) -> bool {
		self.nodes
			.get(index)
			.is_some_and(|n| n.fx.is_some() || n.fy.is_some())
	}

	/// Advances one step and reports whether the simulation is still hot.
	pub fn tick(&mut self) -> bool {
		self.alpha += (self.alpha_target - self.alpha) * self.config.alpha_decay;

		self.apply_links();
		self.apply_many_body();
		self.apply_center();
		self.apply_collision();

		let keep = 1.0 - self.config.velocity_decay;
		for node in &mut self.nodes {
			match node.fx {
				Some(fx) => {
					node.x = fx;
					node.vx = 0.0;
				}
				None => {
					node.vx *= keep;
					node.x += node.vx;
				}
			}
			match node.fy {
				Some(fy) => {
					node.y = fy;
					node.vy = 0.0;
				}
				None => {
					node.vy *= keep;
					node.y += node.vy;
				}
			}
		}

		self.is_hot()
	}

	fn apply_links(&mut self) {
		let strength = self.config.link_strength;
		let distance = self.config.link_distance;
		for link in &self.links {
			let (s, t) = (&self.nodes[link.source], &self.nodes[link.target]);
			let mut x = t.x + t.vx - s.x - s.vx;
			let mut y = t.y + t.vy - s.y - s.vy;
			if x == 0.0 {
				x = self.random.jiggle();
			}
			if y == 0.0 {
				y = self.random.jiggle();
			}
			let len = x.hypot(y);
			let scale = (len - distance) / len * self.alpha * strength;
			x *= scale;
			y *= scale;

			let target = &mut self.nodes[link.target];
			target.vx -= x * link.bias;
			target.vy -= y * link.bias;
			let source = &mut self.nodes[link.source];
			source.vx += x * (1.0 - link.bias);
			source.vy += y * (1.0 - link.bias);
		}
	}

	fn apply_many_body(&mut self) {
		let count = self.nodes.len();
		for i in 0..count {
			let (mut dvx, mut dvy) = (0.0, 0.0);
			for j in 0..count {
				if i == j {
					continue;
				}
				let mut x = self.nodes[j].x - self.nodes[i].x;
				let mut y = self.nodes[j].y - self.nodes[i].y;
				let mut len_sq = x * x + y * y;
				if x == 0.0 {
					x = self.random.jiggle();
					len_sq += x * x;
				}
				if y == 0.0 {
					y = self.random.jiggle();
					len_sq += y * y;
				}
				if len_sq < DISTANCE_MIN_SQ {
					len_sq = (DISTANCE_MIN_SQ * len_sq).sqrt();
				}
				let weight = self.nodes[j].charge * self.alpha / len_sq;
				dvx += x * weight;
				dvy += y * weight;
			}
			self.nodes[i].vx += dvx;
			self.nodes[i].vy += dvy;
		}
	}

	fn apply_center(&mut self) {
		if self.nodes.is_empty() {
			return;
		}
		let count = self.nodes.len() as f64;
		let (sum_x, sum_y) = self
			.nodes
			.iter()
			.fold((0.0, 0.0), |(sx, sy), n| (sx + n.x, sy + n.y));
		let shift_x = (sum_x / count - self.center.x) * self.config.center_strength;
		let shift_y = (sum_y / count - self.center.y) * self.config.center_strength;
		for node in &mut self.nodes {
			node.x -= shift_x;
			node.y -= shift_y;
		}
	}

	fn apply_collision(&mut self) {
		let strength = self.config.collision_strength;
		let count = self.nodes.len();
		for i in 0..count {
			let ri = self.nodes[i].collide_radius;
			let ri_sq = ri * ri;
			let xi = self.nodes[i].x + self.nodes[i].vx;
			let yi = self.nodes[i].y + self.nodes[i].vy;
			for j in (i + 1)..count {
				let rj = self.nodes[j].collide_radius;
				let reach = ri + rj;
				let mut x = xi - self.nodes[j].x - self.nodes[j].vx;
				let mut y = yi - self.nodes[j].y - self.nodes[j].vy;
				let mut len_sq = x * x + y * y;
				if len_sq >= reach * reach {
					continue;
				}
				if x == 0.0 {
					x = self.random.jiggle();
					len_sq += x * x;
				}
				if y == 0.0 {
					y = self.random.jiggle();
					len_sq += y * y;
				}
				let len = len_sq.sqrt();
				let push = (reach - len) / len * strength;
				x *= push;
				y *= push;
				let rj_sq = rj * rj;
				let share = rj_sq / (ri_sq + rj_sq);
				self.nodes[i].vx += x * share;
				self.nodes[i].vy += y * share;
				self.nodes[j].vx -= x * (1.0 - share);
				self.nodes[j].vy -= y * (1.0 - share);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const CENTER: Point = Point::new(400.0, 300.0);

	fn specs(count: usize, charge: f64) -> Vec<SimNodeSpec> {
		vec![
			SimNodeSpec {
				radius: 8.0,
				charge,
			};
			count
		]
	}

	fn run_until_cold(sim: &mut Simulation) -> usize {
		let mut ticks = 0;
		while sim.tick() {
			ticks += 1;
			assert!(ticks < 1_000, "simulation never settled");
		}
		ticks + 1
	}

	#[test]
	fn cools_down_in_about_300_ticks() {
		let mut sim = Simulation::new(&specs(5, -300.0), &[], ForceConfig::default(), CENTER);
		let ticks = run_until_cold(&mut sim);
		assert!((290..=310).contains(&ticks), "took {ticks} ticks");
		assert!(!sim.is_hot());
	}

	#[test]
	fn edgeless_graph_settles_around_center() {
		let mut sim = Simulation::new(&specs(12, -300.0), &[], ForceConfig::default(), CENTER);
		run_until_cold(&mut sim);
		let positions = sim.positions();
		let n = positions.len() as f64;
		let mean = Point::new(
			positions.iter().map(|p| p.x).sum::<f64>() / n,
			positions.iter().map(|p| p.y).sum::<f64>() / n,
		);
		assert!(mean.distance(CENTER) < 0.5, "centroid drifted to {mean:?}");
		assert!(positions.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
	}

	#[test]
	fn link_pulls_pair_toward_rest_length() {
		let config = ForceConfig {
			charge_base: 0.0,
			..ForceConfig::default()
		};
		let mut sim = Simulation::new(&specs(2, 0.0), &[(0, 1)], config, CENTER);
		run_until_cold(&mut sim);
		let gap = sim.position(0).unwrap().distance(sim.position(1).unwrap());
		assert!((100.0..140.0).contains(&gap), "gap was {gap}");
	}

	#[test]
	fn repulsion_spreads_nodes() {
		let mut sim = Simulation::new(&specs(2, -300.0), &[], ForceConfig::default(), CENTER);
		let before = sim.position(0).unwrap().distance(sim.position(1).unwrap());
		run_until_cold(&mut sim);
		let after = sim.position(0).unwrap().distance(sim.position(1).unwrap());
		assert!(after > before * 2.0, "{before} -> {after}");
	}

	#[test]
	fn pinned_node_stays_put() {
		let mut sim = Simulation::new(
			&specs(4, -300.0),
			&[(0, 1), (1, 2), (2, 3)],
			ForceConfig::default(),
			CENTER,
		);
		let pin = Point::new(10.0, 20.0);
		sim.pin(2, pin);
		for _ in 0..50 {
			sim.tick();
		}
		assert_eq!(sim.position(2), Some(pin));
		assert!(sim.is_pinned(2));
		sim.unpin(2);
		assert!(!sim.is_pinned(2));
	}

	#[test]
	fn alpha_target_keeps_simulation_hot() {
		let mut sim = Simulation::new(&specs(3, -300.0), &[], ForceConfig::default(), CENTER);
		sim.set_alpha_target(0.3);
		for _ in 0..2_000 {
			assert!(sim.tick());
		}
		assert!((sim.alpha() - 0.3).abs() < 1e-3);
	}

	#[test]
	fn self_loops_and_dangling_links_are_ignored() {
		let mut sim = Simulation::new(
			&specs(2, -300.0),
			&[(0, 0), (0, 7), (0, 1)],
			ForceConfig::default(),
			CENTER,
		);
		assert_eq!(sim.links.len(), 1);
		sim.tick();
		assert!(sim.positions().iter().all(|p| p.x.is_finite()));
	}

	fn min_gap(sim: &Simulation, radius: f64) -> f64 {
		let positions = sim.positions();
		let mut gap = f64::INFINITY;
		for (i, a) in positions.iter().enumerate() {
			for b in &positions[i + 1..] {
				gap = gap.min(a.distance(*b) - 2.0 * radius);
			}
		}
		gap
	}

	#[test]
	fn collision_alone_separates_crowded_nodes() {
		let config = ForceConfig {
			charge_base: 0.0,
			..ForceConfig::default()
		};
		let crowd = vec![
			SimNodeSpec {
				radius: 14.0,
				charge: 0.0,
			};
			30
		];
		let mut sim = Simulation::new(&crowd, &[], config, CENTER);
		assert!(min_gap(&sim, 14.0) < 0.0, "spiral should start overlapped");
		run_until_cold(&mut sim);
		let gap = min_gap(&sim, 14.0);
		assert!(gap >= 0.0, "nodes still overlap by {}", -gap);
	}

	#[test]
	fn moving_center_moves_centroid() {
		let mut sim = Simulation::new(&specs(6, -300.0), &[], ForceConfig::default(), CENTER);
		let target = Point::new(700.0, 100.0);
		sim.set_center(target);
		run_until_cold(&mut sim);
		let positions = sim.positions();
		let n = positions.len() as f64;
		let mean = Point::new(
			positions.iter().map(|p| p.x).sum::<f64>() / n,
			positions.iter().map(|p| p.y).sum::<f64>() / n,
		);
		assert!(mean.distance(target) < 0.5, "centroid at {mean:?}");
	}

	#[test]
	fn charge_scales_with_degree_and_state() {
		let config = ForceConfig::default();
		assert_eq!(config.charge_for(NodeState::Leaf, 0), -300.0);
		assert_eq!(config.charge_for(NodeState::Leaf, 10), -600.0);
		assert_eq!(config.charge_for(NodeState::Leaf, 500), -1800.0);
		assert!(config.charge_for(NodeState::Healthy, 3) < config.charge_for(NodeState::Leaf, 3));
		assert!(config.charge_for(NodeState::Unused, 3) > config.charge_for(NodeState::Leaf, 3));
	}
}
