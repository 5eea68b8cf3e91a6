use super::*;

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| (*w).to_owned()).collect()
}

fn texts(tw: &mut Typewriter, n: usize) -> Vec<(String, u32)> {
    (0..n)
        .filter_map(|_| tw.tick())
        .map(|step| (step.text, step.delay_ms))
        .collect()
}

#[test]
fn types_holds_deletes_and_moves_on() {
    let timing = EffectsConfig::default();
    let mut tw = Typewriter::new(&words(&["ab", "c"]), timing.clone());
    let steps = texts(&mut tw, 6);
    assert_eq!(
        steps,
        vec![
            ("a".to_owned(), timing.type_speed_ms),
            ("ab".to_owned(), timing.hold_ms),
            ("a".to_owned(), timing.delete_speed_ms),
            (String::new(), timing.pause_ms),
            ("c".to_owned(), timing.hold_ms),
            (String::new(), timing.pause_ms),
        ]
    );
    assert_eq!(tw.tick().map(|s| s.text), Some("a".to_owned()));
}

#[test]
fn empty_word_list_never_ticks() {
    let mut tw = Typewriter::new(&[], EffectsConfig::default());
    assert_eq!(tw.tick(), None);
    let mut tw = Typewriter::new(&words(&[""]), EffectsConfig::default());
    assert_eq!(tw.tick(), None);
}

#[test]
fn multibyte_words_are_typed_per_character() {
    let mut tw = Typewriter::new(&words(&["né"]), EffectsConfig::default());
    assert_eq!(tw.tick().map(|s| s.text), Some("n".to_owned()));
    assert_eq!(tw.tick().map(|s| s.text), Some("né".to_owned()));
}
