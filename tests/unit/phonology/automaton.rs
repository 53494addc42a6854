//! Tests for the syllable automaton, including the consonant override quirk

#[cfg(test)]
mod tests {
    use phonodrift::phonology::automaton::{ClassAutomaton, State};
    use phonodrift::phonology::symbols::Class;

    #[test]
    fn test_start_and_sep_accept_consonant_or_vowel() {
        let automaton = ClassAutomaton::standard();

        for state in [State::Start, State::Sep] {
            assert!(automaton.allows(state, Class::Consonant));
            assert!(automaton.allows(state, Class::Vowel));
            assert!(!automaton.allows(state, Class::Nasal));
            assert!(!automaton.allows(state, Class::Boundary));
            assert_eq!(automaton.next(state, Class::Consonant), State::Onset);
            assert_eq!(automaton.next(state, Class::Vowel), State::Nucleus);
        }
    }

    #[test]
    fn test_onset_accepts_only_vowels() {
        let automaton = ClassAutomaton::standard();

        assert_eq!(automaton.legal_classes(State::Onset).to_vec(), vec![Class::Vowel]);
        assert_eq!(automaton.next(State::Onset, Class::Vowel), State::Nucleus);
    }

    #[test]
    fn test_nucleus_edges() {
        let automaton = ClassAutomaton::standard();

        assert_eq!(
            automaton.legal_classes(State::Nucleus).to_vec(),
            vec![Class::Consonant, Class::Nasal, Class::Boundary]
        );
        assert_eq!(automaton.next(State::Nucleus, Class::Nasal), State::Coda);
        assert_eq!(automaton.next(State::Nucleus, Class::Boundary), State::Sep);
    }

    // Known quirk, reproduced on purpose: the consonant override on Nucleus
    // shadows the plain Consonant -> Coda edge, so only nasals reach Coda
    #[test]
    fn test_consonant_after_nucleus_starts_new_onset() {
        let automaton = ClassAutomaton::standard();

        assert_eq!(automaton.next(State::Nucleus, Class::Consonant), State::Onset);
        assert_eq!(
            automaton.transition(State::Nucleus, Class::Consonant),
            Some(State::Onset)
        );

        let reaches_coda: Vec<(State, Class)> = State::ALL
            .into_iter()
            .flat_map(|s| Class::ALL.into_iter().map(move |c| (s, c)))
            .filter(|&(s, c)| automaton.transition(s, c) == Some(State::Coda))
            .collect();
        assert_eq!(reaches_coda, vec![(State::Nucleus, Class::Nasal)]);
    }

    #[test]
    fn test_coda_edges() {
        let automaton = ClassAutomaton::standard();

        assert!(automaton.allows(State::Coda, Class::Boundary));
        assert!(automaton.allows(State::Coda, Class::Consonant));
        assert!(!automaton.allows(State::Coda, Class::Vowel));
        assert!(!automaton.allows(State::Coda, Class::Nasal));
        assert_eq!(automaton.next(State::Coda, Class::Boundary), State::Sep);
        assert_eq!(automaton.next(State::Coda, Class::Consonant), State::Onset);
    }

    // Missing entries keep the current state instead of failing
    #[test]
    fn test_missing_entry_stays_in_place() {
        let automaton = ClassAutomaton::standard();

        assert_eq!(automaton.transition(State::Onset, Class::Nasal), None);
        assert_eq!(automaton.next(State::Onset, Class::Nasal), State::Onset);
        assert_eq!(automaton.next(State::Coda, Class::Vowel), State::Coda);
    }

    // Table gaps are flagged explicitly; every one of them falls back to staying in place
    #[test]
    fn test_missing_entries_are_listed() {
        let automaton = ClassAutomaton::standard();
        let missing = automaton.missing_entries();

        assert_eq!(missing.len(), 10);
        assert!(missing.contains(&(State::Start, Class::Nasal)));
        assert!(missing.contains(&(State::Onset, Class::Consonant)));
        assert!(missing.contains(&(State::Nucleus, Class::Vowel)));
        assert!(!missing.contains(&(State::Nucleus, Class::Consonant)));

        for (state, class) in missing {
            assert!(!automaton.allows(state, class));
            assert_eq!(automaton.next(state, class), state);
        }
    }

    #[test]
    fn test_allows_agrees_with_transition() {
        let automaton = ClassAutomaton::standard();
        for state in State::ALL {
            for class in Class::ALL {
                assert_eq!(
                    automaton.allows(state, class),
                    automaton.transition(state, class).is_some(),
                    "{state} / {class}"
                );
            }
        }
    }

    #[test]
    fn test_accepting_states() {
        let accepting: Vec<State> = State::ALL
            .into_iter()
            .filter(|s| s.is_accepting())
            .collect();
        assert_eq!(accepting, vec![State::Nucleus, State::Coda, State::Sep]);
        assert_eq!(ClassAutomaton::standard().initial(), State::Start);
    }

    #[test]
    fn test_override_without_plain_edge() {
        let automaton = ClassAutomaton::new().with_consonant_override(State::Coda, State::Start);

        assert!(automaton.allows(State::Coda, Class::Consonant));
        assert!(!automaton.allows(State::Coda, Class::Vowel));
        assert_eq!(automaton.next(State::Coda, Class::Consonant), State::Start);
    }

    #[test]
    fn test_empty_automaton_allows_nothing() {
        let automaton = ClassAutomaton::new();

        assert_eq!(automaton.missing_entries().len(), State::COUNT * Class::COUNT);
        assert!(automaton.legal_classes(State::Start).is_empty());
        assert_eq!(automaton.next(State::Start, Class::Vowel), State::Start);
    }
}
