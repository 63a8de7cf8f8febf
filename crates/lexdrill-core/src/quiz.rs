//! Multiple-choice quiz generation and scoring.
//!
//! A round moves `Idle -> ItemReady -> Answered`, then either on to a fresh
//! item (after a correct answer) or back to `Idle` when the list can no
//! longer be played. Each item carries four option slots: one correct
//! meaning, up to three distractors drawn from the other words in the list,
//! and inert `"N/A"` placeholders when the distractor pool runs dry.

use std::collections::{BTreeSet, HashSet};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{QuizError, StateError};
use crate::model::WordRecord;
use crate::session::SessionContext;
use crate::store::WordStore;

/// Option slots shown for every item.
pub const OPTION_SLOTS: usize = 4;

/// Distinct meanings a list needs before it can be played.
pub const MIN_DISTINCT_MEANINGS: usize = 4;

/// Text shown in a slot that has no distractor to offer.
pub const PLACEHOLDER: &str = "N/A";

/// One option slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOption {
    Meaning(String),
    /// Shown as `"N/A"` and never selectable.
    Placeholder,
}

impl QuizOption {
    pub fn text(&self) -> &str {
        match self {
            QuizOption::Meaning(m) => m,
            QuizOption::Placeholder => PLACEHOLDER,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, QuizOption::Placeholder)
    }
}

/// A generated question: the word to translate and its four options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizItem {
    /// List the item was drawn from.
    pub list_name: String,
    /// The word being asked about.
    pub target: String,
    pub options: [QuizOption; OPTION_SLOTS],
    /// Index into `options` holding the correct meaning.
    pub correct_slot: usize,
    /// The target's counters, refreshed after scoring.
    pub correct_count: u32,
    pub total_count: u32,
    chosen: Option<usize>,
}

impl QuizItem {
    pub fn correct_answer(&self) -> &str {
        self.options[self.correct_slot].text()
    }

    /// Times the target was answered incorrectly, as of the last refresh.
    pub fn incorrect_count(&self) -> u32 {
        self.total_count.saturating_sub(self.correct_count)
    }

    /// The slot picked for this item, once answered.
    pub fn chosen(&self) -> Option<usize> {
        self.chosen
    }

    /// Whether `slot` may still be picked. Everything locks after one guess.
    pub fn is_selectable(&self, slot: usize) -> bool {
        self.chosen.is_none()
            && self
                .options
                .get(slot)
                .is_some_and(|option| !option.is_placeholder())
    }

    pub fn placeholder_count(&self) -> usize {
        self.options.iter().filter(|o| o.is_placeholder()).count()
    }
}

/// Result of scoring one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    Idle,
    ItemReady,
    Answered(Outcome),
}

/// Whether `list` has members and at least four distinct meanings among them.
///
/// Accumulates meanings word by word and stops as soon as four are seen.
pub fn is_playable(store: &WordStore, list: &str) -> bool {
    let mut seen = HashSet::new();
    for (_, record) in store.members(list) {
        for meaning in &record.meanings {
            seen.insert(meaning.as_str());
            if seen.len() >= MIN_DISTINCT_MEANINGS {
                return true;
            }
        }
    }
    false
}

/// Quiz state machine over a word store.
pub struct QuizEngine<R = ChaCha8Rng> {
    rng: R,
    item: Option<QuizItem>,
    outcome: Option<Outcome>,
}

impl QuizEngine<ChaCha8Rng> {
    /// A reproducible engine for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> QuizEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            item: None,
            outcome: None,
        }
    }

    pub fn state(&self) -> QuizState {
        match (&self.item, self.outcome) {
            (None, _) => QuizState::Idle,
            (Some(_), None) => QuizState::ItemReady,
            (Some(_), Some(outcome)) => QuizState::Answered(outcome),
        }
    }

    pub fn current_item(&self) -> Option<&QuizItem> {
        self.item.as_ref()
    }

    /// Draw a new item from `list`.
    ///
    /// Fails with `NotPlayable` and leaves the engine idle when the list
    /// cannot supply four distinct meanings.
    pub fn generate_item(
        &mut self,
        store: &WordStore,
        list: &str,
    ) -> Result<&QuizItem, QuizError> {
        self.outcome = None;
        if !is_playable(store, list) {
            self.item = None;
            tracing::debug!(list, "list not playable, quiz idle");
            return Err(StateError::NotPlayable(list.to_string()).into());
        }

        let members = store.members(list);
        let item = compose_item(&mut self.rng, list, &members);
        tracing::debug!(
            list,
            word = %item.target,
            correct_slot = item.correct_slot,
            placeholders = item.placeholder_count(),
            "generated quiz item"
        );
        Ok(&*self.item.insert(item))
    }

    /// Score the answer in `slot` and lock the item.
    ///
    /// The target's total always grows; its correct count and the session's
    /// correct tally grow only when `slot` holds the correct meaning.
    pub fn score_answer(
        &mut self,
        store: &mut WordStore,
        session: &mut SessionContext,
        slot: usize,
    ) -> Result<Outcome, QuizError> {
        let item = match (&mut self.item, self.outcome) {
            (Some(item), None) => item,
            _ => return Err(StateError::ItemNotReady.into()),
        };
        if !item.is_selectable(slot) {
            return Err(StateError::SlotUnavailable(slot).into());
        }

        let correct = slot == item.correct_slot;
        let record = store.record_answer(&item.target, correct)?;
        item.correct_count = record.correct_count;
        item.total_count = record.total_count;
        item.chosen = Some(slot);

        let outcome = if correct {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        };
        session.record(outcome);
        self.outcome = Some(outcome);
        tracing::debug!(word = %item.target, slot, ?outcome, "scored answer");
        Ok(outcome)
    }

    /// Move on to a new item from the same list.
    ///
    /// Only allowed once the current item was answered correctly.
    pub fn advance(&mut self, store: &WordStore) -> Result<&QuizItem, QuizError> {
        let list = match (&self.item, self.outcome) {
            (Some(item), Some(Outcome::Correct)) => item.list_name.clone(),
            (Some(_), _) => return Err(StateError::MustAnswerFirst.into()),
            (None, _) => return Err(StateError::ItemNotReady.into()),
        };
        self.generate_item(store, &list)
    }
}

/// Build one item from a non-empty member list.
fn compose_item<R: Rng>(rng: &mut R, list: &str, members: &[(&str, &WordRecord)]) -> QuizItem {
    let target_idx = rng.gen_range(0..members.len());
    let (target, record) = members[target_idx];

    let own: HashSet<&str> = record.meanings.iter().map(String::as_str).collect();
    // Sorted set so a seeded rng reproduces the same draws.
    let mut pool: Vec<&str> = members
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != target_idx)
        .flat_map(|(_, (_, r))| r.meanings.iter().map(String::as_str))
        .filter(|m| !own.contains(m))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let correct = record.meanings[rng.gen_range(0..record.meanings.len())].clone();
    let correct_slot = rng.gen_range(0..OPTION_SLOTS);

    let options = std::array::from_fn(|slot| {
        if slot == correct_slot {
            QuizOption::Meaning(correct.clone())
        } else if pool.is_empty() {
            QuizOption::Placeholder
        } else {
            let pick = rng.gen_range(0..pool.len());
            QuizOption::Meaning(pool.swap_remove(pick).to_string())
        }
    });

    QuizItem {
        list_name: list.to_string(),
        target: target.to_string(),
        options,
        correct_slot,
        correct_count: record.correct_count,
        total_count: record.total_count,
        chosen: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use proptest::prelude::*;

    fn animals() -> WordStore {
        let mut store = WordStore::new();
        store.add_word("cat", ["feline"], "Animals").unwrap();
        store.add_word("dog", ["canine"], "Animals").unwrap();
        store.add_word("bird", ["flies"], "Animals").unwrap();
        store.add_word("fish", ["swims"], "Animals").unwrap();
        store
    }

    fn assert_unique_texts(item: &QuizItem) {
        let texts: Vec<&str> = item
            .options
            .iter()
            .filter(|o| !o.is_placeholder())
            .map(QuizOption::text)
            .collect();
        let unique: HashSet<&str> = texts.iter().copied().collect();
        assert_eq!(texts.len(), unique.len(), "duplicate option in {item:?}");
    }

    #[test]
    fn four_single_meaning_words_are_playable() {
        let store = animals();
        assert!(is_playable(&store, "Animals"));

        let mut engine = QuizEngine::seeded(7);
        for _ in 0..100 {
            let item = engine.generate_item(&store, "Animals").unwrap();
            assert_eq!(item.placeholder_count(), 0);
            assert_unique_texts(item);
            let own = &store.get(&item.target).unwrap().meanings;
            assert!(own.iter().any(|m| m == item.correct_answer()));
        }
    }

    #[test]
    fn too_few_meanings_is_not_playable() {
        let mut store = WordStore::new();
        store.add_word("only", ["a", "b"], "X").unwrap();
        assert!(!is_playable(&store, "X"));
        assert!(!is_playable(&store, "Missing"));

        let mut engine = QuizEngine::seeded(1);
        let err = engine.generate_item(&store, "X").unwrap_err();
        assert_eq!(err, QuizError::State(StateError::NotPlayable("X".into())));
        assert_eq!(engine.state(), QuizState::Idle);
    }

    #[test]
    fn duplicate_meanings_count_once() {
        let mut store = WordStore::new();
        store.add_word("a", ["x", "y"], "L").unwrap();
        store.add_word("b", ["x", "y", "z"], "L").unwrap();
        assert!(!is_playable(&store, "L"));
        store.add_word("c", ["w"], "L").unwrap();
        assert!(is_playable(&store, "L"));
    }

    #[test]
    fn three_distinct_meanings_yield_one_disabled_placeholder() {
        let mut store = WordStore::new();
        store.add_word("cat", ["feline"], "L").unwrap();
        store.add_word("dog", ["canine"], "L").unwrap();
        store.add_word("bird", ["flies"], "L").unwrap();
        let members = store.members("L");
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..50 {
            let item = compose_item(&mut rng, "L", &members);
            assert_eq!(item.placeholder_count(), 1);
            let slot = item
                .options
                .iter()
                .position(QuizOption::is_placeholder)
                .unwrap();
            assert!(!item.is_selectable(slot));
            assert_eq!(item.options[slot].text(), PLACEHOLDER);
        }
    }

    #[test]
    fn shared_meaning_is_never_a_distractor() {
        let mut store = WordStore::new();
        store.add_word("big", ["large", "huge"], "Adj").unwrap();
        store.add_word("vast", ["large", "wide"], "Adj").unwrap();
        store.add_word("tiny", ["small"], "Adj").unwrap();
        let mut engine = QuizEngine::seeded(11);
        for _ in 0..200 {
            let item = engine.generate_item(&store, "Adj").unwrap().clone();
            let own = &store.get(&item.target).unwrap().meanings;
            for (slot, option) in item.options.iter().enumerate() {
                if slot != item.correct_slot && !option.is_placeholder() {
                    assert!(!own.iter().any(|m| m == option.text()));
                }
            }
            assert_unique_texts(&item);
        }
    }

    #[test]
    fn single_rich_word_fills_with_placeholders() {
        let mut store = WordStore::new();
        store.add_word("run", ["sprint", "jog", "dash", "flee"], "Verbs").unwrap();
        let mut engine = QuizEngine::seeded(5);
        let item = engine.generate_item(&store, "Verbs").unwrap();
        assert_eq!(item.placeholder_count(), 3);
        assert!(item.is_selectable(item.correct_slot));
    }

    #[test]
    fn correct_slot_is_spread_evenly() {
        let store = animals();
        let mut engine = QuizEngine::seeded(99);
        let mut counts = [0usize; OPTION_SLOTS];
        for _ in 0..4000 {
            let item = engine.generate_item(&store, "Animals").unwrap();
            counts[item.correct_slot] += 1;
        }
        for count in counts {
            assert!((850..1150).contains(&count), "skewed slots: {counts:?}");
        }
    }

    #[test]
    fn scoring_correct_updates_word_and_session() {
        let mut store = animals();
        let mut session = SessionContext::new();
        let mut engine = QuizEngine::seeded(2);
        let item = engine.generate_item(&store, "Animals").unwrap().clone();

        let outcome = engine
            .score_answer(&mut store, &mut session, item.correct_slot)
            .unwrap();
        assert_eq!(outcome, Outcome::Correct);
        assert_eq!(engine.state(), QuizState::Answered(Outcome::Correct));

        let record = store.get(&item.target).unwrap();
        assert_eq!((record.correct_count, record.total_count), (1, 1));
        assert_eq!((session.correct(), session.answered()), (1, 1));

        let answered = engine.current_item().unwrap();
        assert_eq!(answered.chosen(), Some(item.correct_slot));
        assert_eq!(answered.total_count, 1);
        assert_eq!(answered.incorrect_count(), 0);
        assert!((0..OPTION_SLOTS).all(|s| !answered.is_selectable(s)));
    }

    #[test]
    fn scoring_incorrect_counts_total_only() {
        let mut store = animals();
        let mut session = SessionContext::new();
        let mut engine = QuizEngine::seeded(4);
        let item = engine.generate_item(&store, "Animals").unwrap().clone();
        let wrong = (item.correct_slot + 1) % OPTION_SLOTS;

        let outcome = engine.score_answer(&mut store, &mut session, wrong).unwrap();
        assert_eq!(outcome, Outcome::Incorrect);
        let record = store.get(&item.target).unwrap();
        assert_eq!((record.correct_count, record.total_count), (0, 1));
        assert_eq!((session.correct(), session.answered()), (0, 1));
        assert_eq!(engine.current_item().unwrap().incorrect_count(), 1);
    }

    #[test]
    fn only_one_guess_per_item() {
        let mut store = animals();
        let mut session = SessionContext::new();
        let mut engine = QuizEngine::seeded(6);
        let slot = engine.generate_item(&store, "Animals").unwrap().correct_slot;
        engine.score_answer(&mut store, &mut session, slot).unwrap();
        let err = engine
            .score_answer(&mut store, &mut session, slot)
            .unwrap_err();
        assert_eq!(err, QuizError::State(StateError::ItemNotReady));
        assert_eq!(session.answered(), 1);
    }

    #[test]
    fn placeholder_and_out_of_range_slots_are_rejected() {
        let mut store = WordStore::new();
        store.add_word("run", ["sprint", "jog", "dash", "flee"], "Verbs").unwrap();
        let mut session = SessionContext::new();
        let mut engine = QuizEngine::seeded(8);
        let item = engine.generate_item(&store, "Verbs").unwrap().clone();
        let placeholder = (0..OPTION_SLOTS).find(|&s| s != item.correct_slot).unwrap();

        let err = engine
            .score_answer(&mut store, &mut session, placeholder)
            .unwrap_err();
        assert_eq!(err, QuizError::State(StateError::SlotUnavailable(placeholder)));
        let err = engine.score_answer(&mut store, &mut session, 9).unwrap_err();
        assert_eq!(err, QuizError::State(StateError::SlotUnavailable(9)));
        assert_eq!(engine.state(), QuizState::ItemReady);
        assert_eq!(store.get("run").unwrap().total_count, 0);
    }

    #[test]
    fn scoring_without_item_is_rejected() {
        let mut store = animals();
        let mut session = SessionContext::new();
        let mut engine = QuizEngine::seeded(0);
        let err = engine.score_answer(&mut store, &mut session, 0).unwrap_err();
        assert_eq!(err, QuizError::State(StateError::ItemNotReady));
    }

    #[test]
    fn scoring_a_deleted_word_leaves_item_ready() {
        let mut store = animals();
        let mut session = SessionContext::new();
        let mut engine = QuizEngine::seeded(12);
        let item = engine.generate_item(&store, "Animals").unwrap().clone();
        store.remove_word(&item.target).unwrap();
        let err = engine
            .score_answer(&mut store, &mut session, item.correct_slot)
            .unwrap_err();
        assert_eq!(err, QuizError::Validation(ValidationError::NotFound(item.target)));
        assert_eq!(engine.state(), QuizState::ItemReady);
        assert_eq!(session.answered(), 0);
    }

    #[test]
    fn advance_requires_a_correct_answer() {
        let mut store = animals();
        let mut session = SessionContext::new();
        let mut engine = QuizEngine::seeded(13);

        assert_eq!(
            engine.advance(&store).unwrap_err(),
            QuizError::State(StateError::ItemNotReady)
        );

        let item = engine.generate_item(&store, "Animals").unwrap().clone();
        assert_eq!(
            engine.advance(&store).unwrap_err(),
            QuizError::State(StateError::MustAnswerFirst)
        );

        let wrong = (item.correct_slot + 1) % OPTION_SLOTS;
        engine.score_answer(&mut store, &mut session, wrong).unwrap();
        assert_eq!(
            engine.advance(&store).unwrap_err(),
            QuizError::State(StateError::MustAnswerFirst)
        );

        let slot = engine.generate_item(&store, "Animals").unwrap().correct_slot;
        engine.score_answer(&mut store, &mut session, slot).unwrap();
        let next = engine.advance(&store).unwrap();
        assert_eq!(next.list_name, "Animals");
        assert_eq!(next.chosen(), None);
        assert_eq!(engine.state(), QuizState::ItemReady);
    }

    #[test]
    fn advance_goes_idle_when_list_shrinks() {
        let mut store = animals();
        let mut session = SessionContext::new();
        let mut engine = QuizEngine::seeded(14);
        let slot = engine.generate_item(&store, "Animals").unwrap().correct_slot;
        engine.score_answer(&mut store, &mut session, slot).unwrap();
        store.remove_word("fish").unwrap();

        let err = engine.advance(&store).unwrap_err();
        assert_eq!(err, QuizError::State(StateError::NotPlayable("Animals".into())));
        assert_eq!(engine.state(), QuizState::Idle);
    }

    fn word_lists() -> impl Strategy<Value = Vec<Vec<String>>> {
        prop::collection::vec(prop::collection::vec("[a-f]{1,2}", 1..4), 1..8)
    }

    proptest! {
        #[test]
        fn options_never_repeat(lists in word_lists(), seed in any::<u64>()) {
            let mut store = WordStore::new();
            for (i, meanings) in lists.iter().enumerate() {
                store.add_word(&format!("w{i}"), meanings, "P").unwrap();
            }
            let mut engine = QuizEngine::seeded(seed);
            if is_playable(&store, "P") {
                for _ in 0..10 {
                    let item = engine.generate_item(&store, "P").unwrap();
                    let texts: Vec<&str> = item
                        .options
                        .iter()
                        .filter(|o| !o.is_placeholder())
                        .map(QuizOption::text)
                        .collect();
                    let unique: HashSet<&str> = texts.iter().copied().collect();
                    prop_assert_eq!(texts.len(), unique.len());
                }
            } else {
                prop_assert!(engine.generate_item(&store, "P").is_err());
            }
        }

        #[test]
        fn counters_stay_ordered(
            picks in prop::collection::vec(0usize..4, 1..40),
            seed in any::<u64>()
        ) {
            let mut store = animals();
            let mut session = SessionContext::new();
            let mut engine = QuizEngine::seeded(seed);
            for pick in picks {
                engine.generate_item(&store, "Animals").unwrap();
                engine.score_answer(&mut store, &mut session, pick).unwrap();
            }
            for record in store.records().values() {
                prop_assert!(record.correct_count <= record.total_count);
            }
            prop_assert!(session.correct() <= session.answered());
        }
    }
}
