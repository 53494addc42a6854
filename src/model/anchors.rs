//! Compiled-in anchor transition tables
//!
//! Anchor A favours open `a/i/u` syllables over plosive onsets. Anchor B
//! favours `e/o` nuclei, fricative onsets and nasal codas. Neither table is
//! required to name the same symbols as the other.

use crate::model::row::AnchorModel;
use std::sync::LazyLock;

type Entries = &'static [(char, &'static [(char, f64)])];

const ANCHOR_A_ENTRIES: Entries = &[
    ('#', &[('p', 0.34), ('t', 0.33), ('k', 0.2), ('s', 0.13)]),
    (
        'p',
        &[
            ('a', 0.35),
            ('i', 0.2),
            ('u', 0.15),
            ('r', 0.1),
            ('l', 0.1),
            ('#', 0.1),
        ],
    ),
    (
        't',
        &[('a', 0.4), ('i', 0.25), ('u', 0.15), ('r', 0.1), ('#', 0.1)],
    ),
    (
        'k',
        &[('a', 0.3), ('u', 0.3), ('i', 0.2), ('l', 0.1), ('#', 0.1)],
    ),
    ('s', &[('a', 0.3), ('i', 0.3), ('u', 0.2), ('#', 0.2)]),
    ('r', &[('a', 0.5), ('i', 0.3), ('u', 0.2)]),
    ('l', &[('a', 0.4), ('i', 0.4), ('u', 0.2)]),
    ('m', &[('a', 0.4), ('i', 0.2), ('u', 0.2), ('#', 0.2)]),
    ('n', &[('a', 0.3), ('i', 0.3), ('u', 0.2), ('#', 0.2)]),
    (
        'a',
        &[
            ('p', 0.15),
            ('t', 0.15),
            ('k', 0.15),
            ('s', 0.1),
            ('n', 0.15),
            ('m', 0.1),
            ('#', 0.2),
        ],
    ),
    (
        'i',
        &[
            ('p', 0.1),
            ('t', 0.2),
            ('k', 0.1),
            ('s', 0.15),
            ('n', 0.15),
            ('m', 0.1),
            ('#', 0.2),
        ],
    ),
    (
        'u',
        &[
            ('p', 0.15),
            ('t', 0.1),
            ('k', 0.2),
            ('s', 0.1),
            ('n', 0.15),
            ('m', 0.1),
            ('#', 0.2),
        ],
    ),
];

const ANCHOR_B_ENTRIES: Entries = &[
    (
        '#',
        &[
            ('s', 0.25),
            ('v', 0.15),
            ('h', 0.1),
            ('l', 0.1),
            ('e', 0.2),
            ('o', 0.2),
        ],
    ),
    (
        'p',
        &[('e', 0.3), ('o', 0.3), ('a', 0.2), ('r', 0.1), ('#', 0.1)],
    ),
    ('t', &[('e', 0.35), ('o', 0.25), ('a', 0.2), ('#', 0.2)]),
    (
        'k',
        &[('o', 0.4), ('e', 0.2), ('a', 0.2), ('l', 0.1), ('#', 0.1)],
    ),
    (
        's',
        &[('e', 0.3), ('o', 0.3), ('a', 0.1), ('i', 0.1), ('#', 0.2)],
    ),
    ('r', &[('e', 0.4), ('o', 0.4), ('a', 0.2)]),
    ('l', &[('e', 0.3), ('o', 0.3), ('i', 0.2), ('a', 0.2)]),
    ('v', &[('e', 0.4), ('o', 0.3), ('a', 0.3)]),
    ('h', &[('a', 0.3), ('e', 0.3), ('o', 0.4)]),
    ('m', &[('e', 0.3), ('o', 0.3), ('a', 0.2), ('#', 0.2)]),
    ('n', &[('e', 0.3), ('o', 0.2), ('a', 0.2), ('#', 0.3)]),
    (
        'a',
        &[('n', 0.3), ('m', 0.2), ('l', 0.1), ('s', 0.1), ('#', 0.3)],
    ),
    ('i', &[('n', 0.3), ('m', 0.1), ('l', 0.1), ('#', 0.5)]),
    ('u', &[('n', 0.25), ('m', 0.25), ('r', 0.1), ('#', 0.4)]),
    (
        'e',
        &[('n', 0.3), ('m', 0.15), ('l', 0.15), ('s', 0.1), ('#', 0.3)],
    ),
    (
        'o',
        &[('n', 0.3), ('m', 0.2), ('r', 0.1), ('h', 0.1), ('#', 0.3)],
    ),
];

// Static tables hold only finite non-negative weights, so construction cannot fail
static ANCHOR_A: LazyLock<AnchorModel> =
    LazyLock::new(|| AnchorModel::from_entries(ANCHOR_A_ENTRIES).unwrap_or_default());

static ANCHOR_B: LazyLock<AnchorModel> =
    LazyLock::new(|| AnchorModel::from_entries(ANCHOR_B_ENTRIES).unwrap_or_default());

/// Anchor at drift 0
pub fn anchor_a() -> &'static AnchorModel {
    &ANCHOR_A
}

/// Anchor at drift 1
pub fn anchor_b() -> &'static AnchorModel {
    &ANCHOR_B
}
