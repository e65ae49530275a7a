//! Interactive session integration tests.

use core::ops::ControlFlow;
use std::io::Cursor;

use deckrs::{DECK_SIZE, Deck, DeckOptions, MenuOption, Session};

const MENU: &str = "\
Options: option [1] Reset deck
         option [2] Draw 1 Card
         option [3] Draw multiple cards
         option [4] Sort deck
         option [5] Create new deck
         option [6] Print deck
         option [E] Exit
";

type ScriptSession = Session<Cursor<String>, Vec<u8>>;

fn session(script: &str, options: DeckOptions) -> ScriptSession {
    Session::new(Cursor::new(script.to_owned()), Vec::new(), options)
}

fn run_script(script: &str, options: DeckOptions) -> (Vec<deckrs::Card>, String) {
    let mut session = session(script, options);
    session.run().unwrap();
    let cards = session.deck().cards().to_vec();
    let output = String::from_utf8(session.into_output()).unwrap();
    (cards, output)
}

fn run_bytes(script: &[u8], options: DeckOptions) -> (Vec<deckrs::Card>, String) {
    let mut session = Session::new(Cursor::new(script.to_vec()), Vec::new(), options);
    session.run().unwrap();
    let cards = session.deck().cards().to_vec();
    let output = String::from_utf8(session.into_output()).unwrap();
    (cards, output)
}

#[test]
fn exit_prints_menu_and_goodbye() {
    let (cards, output) = run_script("E\n", DeckOptions::default());

    assert_eq!(cards.len(), DECK_SIZE);
    assert_eq!(output, format!("{MENU}Good bye!\n\n"));
}

#[test]
fn end_of_input_ends_session() {
    let (_, output) = run_script("", DeckOptions::default());
    assert_eq!(output, format!("{MENU}Good bye!\n\n"));

    let (_, output) = run_script("3\n", DeckOptions::default());
    assert!(output.ends_with("Enter number of cards to be dealt\nGood bye!\n\n"));

    let (_, output) = run_script("4\n", DeckOptions::default());
    assert!(output.ends_with("Sort by [R] Rank or [S] Suit:\nGood bye!\n\n"));
}

#[test]
fn non_utf8_menu_input_is_an_invalid_option() {
    let options = DeckOptions::default().with_shuffle(false);
    let (cards, output) = run_bytes(b"\xff\xfe\n6\nE\n", options);

    assert_eq!(output.matches("Invalid Option\n").count(), 1);
    assert!(output.contains("1. Ace of Spades\n"));
    assert!(output.contains("52. King of Hearts\n"));
    assert!(output.ends_with("Good bye!\n\n"));
    assert_eq!(cards.len(), DECK_SIZE);
}

#[test]
fn non_utf8_sub_prompt_input_reprompts() {
    let options = DeckOptions::default().with_shuffle(false);

    let (cards, output) = run_bytes(b"3\n\xff\n2\nE\n", options);
    assert_eq!(output.matches("Enter number of cards to be dealt\n").count(), 2);
    assert!(output.contains("Deck has 50 left\n"));
    assert_eq!(cards.len(), DECK_SIZE - 2);

    let (_, output) = run_bytes(b"4\nR\xff\nS\nE\n", options);
    assert_eq!(output.matches("Sort by [R] Rank or [S] Suit:\n").count(), 2);
    assert!(output.contains("Sorted by suit\n"));
}

#[test]
fn untrimmed_sub_prompt_input_is_accepted() {
    let options = DeckOptions::default().with_shuffle(false);
    let (cards, output) = run_script("3\n  2 \r\n4\n R\r\nE\n", options);

    assert_eq!(output.matches("Enter number of cards to be dealt\n").count(), 1);
    assert_eq!(output.matches("Sort by [R] Rank or [S] Suit:\n").count(), 1);
    assert!(output.contains("Sorted by rank\n"));
    assert_eq!(cards.len(), DECK_SIZE - 2);
}

#[test]
fn invalid_option_reprompts_without_changing_deck() {
    let options = DeckOptions::default().with_seed(1);
    let (cards, output) = run_script("9\ne\n\nE\n", options);

    assert_eq!(cards, Deck::with_options(options).cards());
    assert_eq!(output.matches("Invalid Option\n").count(), 3);
    assert_eq!(output.matches(MENU).count(), 4);
}

#[test]
fn deal_one_reports_card_and_remaining() {
    let options = DeckOptions::default().with_shuffle(false);
    let (cards, output) = run_script("2\nE\n", options);

    assert_eq!(cards.len(), DECK_SIZE - 1);
    assert!(output.contains("Drew Ace of Spades - Deck has 51 left\n"));
}

#[test]
fn deal_many_reprompts_until_count_parses() {
    let options = DeckOptions::default().with_shuffle(false);
    let (cards, output) = run_script("3\nthree\n-2\n3\nE\n", options);

    assert_eq!(output.matches("Enter number of cards to be dealt\n").count(), 3);
    assert!(output.contains(
        "Drew Ace of Spades\nDrew Ace of Diamonds\nDrew Ace of Clubs\nDeck has 49 left\n"
    ));
    assert_eq!(cards.len(), DECK_SIZE - 3);
}

#[test]
fn dealing_too_many_reports_error_and_keeps_deck() {
    let options = DeckOptions::default().with_seed(3);
    let (cards, output) = run_script("3\n53\nE\n", options);

    assert!(output.contains("Cannot deal: requested 53 cards but only 52 remain\n"));
    assert_eq!(cards, Deck::with_options(options).cards());
}

#[test]
fn dealing_from_empty_deck_reports_error() {
    let options = DeckOptions::default().with_seed(4);
    let (cards, output) = run_script("3\n52\n2\nE\n", options);

    assert!(output.contains("Deck has 0 left\n"));
    assert!(output.contains("Cannot deal: the deck is empty\n"));
    assert!(cards.is_empty());
}

#[test]
fn sort_reprompts_until_letter_matches() {
    let options = DeckOptions::default().with_seed(5);
    let (cards, output) = run_script("4\nx\nr\nS\nE\n", options);

    assert_eq!(output.matches("Sort by [R] Rank or [S] Suit:\n").count(), 3);
    assert!(output.contains("Sorted by suit\n"));

    let mut expected = Deck::ordered();
    expected.sort_by(deckrs::SortKey::Suit);
    assert_eq!(cards, expected.cards());
}

#[test]
fn sort_by_rank_then_print_lists_ascending() {
    let options = DeckOptions::default().with_seed(6);
    let (_, output) = run_script("4\nR\n6\nE\n", options);

    assert!(output.contains("Sorted by rank\n"));
    assert!(output.contains("1. Ace of Spades\n2. Ace of Diamonds\n"));
    assert!(output.contains("52. King of Hearts\n"));
}

#[test]
fn reset_and_new_deck_restore_full_deck() {
    let options = DeckOptions::default().with_seed(7);

    let (cards, output) = run_script("3\n10\n1\nE\n", options);
    assert!(output.contains("Deck reset!\n"));
    assert_eq!(cards.len(), DECK_SIZE);

    let (cards, output) = run_script("3\n10\n5\nE\n", options);
    assert!(output.contains("New deck created!\n"));
    assert_eq!(cards, Deck::with_options(options).cards());
}

#[test]
fn dispatch_signals_exit() {
    let mut session = session("", DeckOptions::default());

    assert_eq!(
        session.dispatch(MenuOption::DealOne).unwrap(),
        ControlFlow::Continue(())
    );
    assert_eq!(
        session.dispatch(MenuOption::Exit).unwrap(),
        ControlFlow::Break(())
    );
    assert_eq!(session.deck().len(), DECK_SIZE - 1);
}

#[test]
fn menu_option_parses_keys() {
    assert_eq!("1".parse::<MenuOption>(), Ok(MenuOption::Reset));
    assert_eq!(" 6 ".parse::<MenuOption>(), Ok(MenuOption::Print));
    assert_eq!("E".parse::<MenuOption>(), Ok(MenuOption::Exit));
    assert!("7".parse::<MenuOption>().is_err());
    assert!("exit".parse::<MenuOption>().is_err());
}
