//! Matching quiz over a random sample of a language's vocabulary.
//!
//! A session samples up to [`QUIZ_SIZE`] word pairs, shows their terms and
//! their definitions in two independently shuffled orders, and lets the user
//! pair a term with its definition by selecting one of each. The session is
//! complete once every item has been matched.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::logger;
use crate::models::{Language, WordPair};

/// Maximum number of word pairs sampled into one session.
pub const QUIZ_SIZE: usize = 10;

/// Index of an item in presentation order.
pub type ItemId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Term,
    Definition,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizItem {
    kind: SlotKind,
    text: String,
    matched: bool,
    selected: bool,
}

impl QuizItem {
    fn new(kind: SlotKind, text: String) -> Self {
        Self {
            kind,
            text,
            matched: false,
            selected: false,
        }
    }

    pub fn kind(&self) -> SlotKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_matched(&self) -> bool {
        self.matched
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

/// Currently selected, unmatched items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    None,
    One(ItemId),
    Two(ItemId, ItemId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    /// Nothing to quiz on: the pool was empty.
    Idle,
    Active,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Unknown item, matched item, or a session that is not active.
    Ignored,
    Selected,
    Deselected,
    /// A term and a definition from different pairs; both are released.
    Mismatched,
    Matched,
    /// The last pair was matched. Returned once per session.
    Completed,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    language: Language,
    sampled: Vec<WordPair>,
    items: Vec<QuizItem>,
    selection: Selection,
    state: QuizState,
    matched_pairs: usize,
}

impl QuizSession {
    pub fn start(language: Language, pool: &[WordPair]) -> Self {
        Self::start_with_rng(language, pool, &mut rand::thread_rng())
    }

    pub fn start_with_rng<R: Rng + ?Sized>(
        language: Language,
        pool: &[WordPair],
        rng: &mut R,
    ) -> Self {
        let n = pool.len().min(QUIZ_SIZE);
        let sampled: Vec<WordPair> = pool.choose_multiple(rng, n).cloned().collect();

        // Terms and definitions are shuffled separately so row i of one
        // column says nothing about row i of the other.
        let mut terms: Vec<String> = sampled.iter().map(|pair| pair.term.clone()).collect();
        let mut definitions: Vec<String> =
            sampled.iter().map(|pair| pair.definition.clone()).collect();
        terms.shuffle(rng);
        definitions.shuffle(rng);

        let items = terms
            .into_iter()
            .zip(definitions)
            .flat_map(|(term, definition)| {
                [
                    QuizItem::new(SlotKind::Term, term),
                    QuizItem::new(SlotKind::Definition, definition),
                ]
            })
            .collect();

        let state = if n == 0 { QuizState::Idle } else { QuizState::Active };
        logger::log(&format!("Started {} quiz with {} pairs", language, n));

        Self {
            language,
            sampled,
            items,
            selection: Selection::None,
            state,
            matched_pairs: 0,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == QuizState::Complete
    }

    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&QuizItem> {
        self.items.get(id)
    }

    /// The word pairs drawn from the pool for this session.
    pub fn sampled(&self) -> &[WordPair] {
        &self.sampled
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn pair_count(&self) -> usize {
        self.sampled.len()
    }

    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// First item of `kind` showing `text`, in presentation order.
    pub fn position_of(&self, kind: SlotKind, text: &str) -> Option<ItemId> {
        self.items
            .iter()
            .position(|item| item.kind == kind && item.text == text)
    }

    /// Handles a click on an item.
    ///
    /// A click while two items are selected first releases both. Clicking the
    /// single selected item deselects it. Once a term and a definition are
    /// selected they are checked against the sampled pairs and either become
    /// matched or are both released.
    pub fn select_item(&mut self, id: ItemId) -> SelectOutcome {
        if self.state != QuizState::Active {
            return SelectOutcome::Ignored;
        }
        match self.items.get(id) {
            Some(item) if !item.matched => {}
            _ => return SelectOutcome::Ignored,
        }

        if let Selection::Two(a, b) = self.selection {
            self.items[a].selected = false;
            self.items[b].selected = false;
            self.selection = Selection::None;
        }

        match self.selection {
            Selection::One(first) if first == id => {
                self.items[id].selected = false;
                self.selection = Selection::None;
                SelectOutcome::Deselected
            }
            Selection::One(first) => {
                self.items[id].selected = true;
                self.selection = Selection::Two(first, id);
                self.evaluate(first, id)
            }
            Selection::None | Selection::Two(..) => {
                self.items[id].selected = true;
                self.selection = Selection::One(id);
                SelectOutcome::Selected
            }
        }
    }

    fn evaluate(&mut self, first: ItemId, second: ItemId) -> SelectOutcome {
        let (term_id, definition_id) = match (self.items[first].kind, self.items[second].kind) {
            (SlotKind::Term, SlotKind::Definition) => (first, second),
            (SlotKind::Definition, SlotKind::Term) => (second, first),
            // Two of the same kind stay selected until the next click.
            _ => return SelectOutcome::Selected,
        };

        let is_match = self.is_pair(&self.items[term_id].text, &self.items[definition_id].text);

        for id in [term_id, definition_id] {
            self.items[id].selected = false;
            self.items[id].matched = is_match;
        }
        self.selection = Selection::None;

        if !is_match {
            return SelectOutcome::Mismatched;
        }

        self.matched_pairs += 1;
        if self.items.iter().all(|item| item.matched) {
            self.state = QuizState::Complete;
            logger::log(&format!("Completed {} quiz", self.language));
            SelectOutcome::Completed
        } else {
            SelectOutcome::Matched
        }
    }

    fn is_pair(&self, term: &str, definition: &str) -> bool {
        self.sampled.iter().any(|pair| {
            (pair.term == term && pair.definition == definition)
                || (pair.term == definition && pair.definition == term)
        })
    }
}
