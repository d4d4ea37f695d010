//! "Buy me a coffee" widget with a short click-the-cup game.

use std::time::Duration;

use leptos::prelude::*;

/// Length of one round in seconds.
pub const ROUND_SECONDS: u32 = 10;

/// Phase of the coffee game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GamePhase {
	/// Waiting for the first round.
	#[default]
	Idle,
	/// Round in progress.
	Playing {
		/// Seconds left.
		remaining: u32,
		/// Clicks so far.
		hits: u32,
	},
	/// Round over.
	Finished {
		/// Final score.
		hits: u32,
	},
}

/// Countdown click game state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CoffeeGame {
	phase: GamePhase,
	best: u32,
}

impl CoffeeGame {
	/// Current phase.
	pub fn phase(&self) -> GamePhase {
		self.phase
	}

	/// Highest score of any finished round.
	pub fn best(&self) -> u32 {
		self.best
	}

	/// Whether any round has finished with at least one hit.
	pub fn has_best(&self) -> bool {
		self.best > 0
	}

	/// Whether a round is running.
	pub fn is_playing(&self) -> bool {
		matches!(self.phase, GamePhase::Playing { .. })
	}

	/// Starts a fresh round unless one is running.
	pub fn start(&mut self) {
		if !self.is_playing() {
			self.phase = GamePhase::Playing {
				remaining: ROUND_SECONDS,
				hits: 0,
			};
		}
	}

	/// Counts a click on the cup. Ignored outside a round.
	pub fn hit(&mut self) {
		if let GamePhase::Playing { hits, .. } = &mut self.phase {
			*hits += 1;
		}
	}

	/// Advances the countdown by a second, finishing the round at zero.
	pub fn second_elapsed(&mut self) {
		if let GamePhase::Playing { remaining, hits } = self.phase {
			let remaining = remaining.saturating_sub(1);
			if remaining == 0 {
				self.best = self.best.max(hits);
				self.phase = GamePhase::Finished { hits };
			} else {
				self.phase = GamePhase::Playing { remaining, hits };
			}
		}
	}
}

/// Verdict shown after a round.
pub fn rating(hits: u32) -> &'static str {
	match hits {
		0 => "Still asleep?",
		1..=19 => "Decaf energy.",
		20..=49 => "Solid espresso.",
		_ => "Triple shot!",
	}
}

/// Donation card with the coffee game.
#[component]
pub fn DonationWidget(
	/// Donation page link.
	href: &'static str,
) -> impl IntoView {
	let (game, set_game) = signal(CoffeeGame::default());

	let countdown = move || {
		if game.get_untracked().is_playing() {
			set_game.update(CoffeeGame::second_elapsed);
		}
	};
	match set_interval_with_handle(countdown, Duration::from_secs(1)) {
		Ok(handle) => on_cleanup(move || handle.clear()),
		Err(err) => log::warn!("coffee game timer unavailable: {}", crate::error::js_message(&err)),
	}

	let status = move || match game.get().phase() {
		GamePhase::Idle => "Click the cup as fast as you can for ten seconds.".to_string(),
		GamePhase::Playing { remaining, hits } => format!("{hits} sips, {remaining}s left"),
		GamePhase::Finished { hits } => format!("{hits} sips. {}", rating(hits)),
	};

	view! {
		<div class="donation-widget">
			<h3>"Fuel the project"</h3>
			<p class="donation-status">{status}</p>
			<button
				class=move || if game.get().is_playing() { "coffee-cup brewing" } else { "coffee-cup" }
				aria-label="coffee cup"
				on:click=move |_| set_game.update(CoffeeGame::hit)
			>
				"\u{2615}"
			</button>
			<div class="donation-actions">
				<button
					class="btn btn-secondary"
					disabled=move || game.get().is_playing()
					on:click=move |_| set_game.update(CoffeeGame::start)
				>
					{move || match game.get().phase() {
						GamePhase::Idle => "Start",
						_ => "Play again",
					}}
				</button>
				<a class="btn btn-primary" href=href target="_blank" rel="noopener">
					"Buy a real coffee"
				</a>
			</div>
			<Show when=move || game.get().has_best()>
				<p class="donation-best">{move || format!("Best: {}", game.get().best())}</p>
			</Show>
		</div>
	}
}
