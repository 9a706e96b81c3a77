use letter_stats_domain::{CharClass, LetterStatEntry, LetterStatsTable};
use letter_stats_shared_kernel::{LetterKey, is_letter};
use proptest::prelude::*;

fn arb_table() -> impl Strategy<Value = LetterStatsTable> {
    prop::collection::vec((prop::char::range('A', 'z'), 1usize..50, any::<bool>()), 0..40).prop_map(|rows| {
        rows.into_iter()
            .filter(|(c, _, _)| is_letter(*c))
            .map(|(c, n, pair)| {
                let key = if pair { LetterKey::pair(c) } else { LetterKey::single(c) };
                LetterStatEntry::new(key, n)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn filter_only_removes(original in arb_table(), vowel in any::<bool>()) {
        let class = if vowel { CharClass::Vowel } else { CharClass::Consonant };
        let mut filtered = original.clone();
        filtered.remove_class(class);

        for (key, count) in filtered.iter() {
            prop_assert_eq!(original.get(key.as_str()), Some(count));
            prop_assert!(!key.chars().any(|c| class.contains(c)));
        }
        for (key, _) in original.iter() {
            if !key.chars().any(|c| class.contains(c)) {
                prop_assert_eq!(filtered.get(key.as_str()), original.get(key.as_str()));
            }
        }
    }
}
