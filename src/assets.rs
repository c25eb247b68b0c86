//! Bundled image assets and the handle-to-sprite registry.
//!
//! The terminal stand-in for a platform asset bundle: each puppy image is an
//! ASCII-art sprite keyed by an opaque [`ImageHandle`]. Resolution never
//! panics; an unknown handle simply yields `None` and callers fall back to a
//! placeholder.

use crate::catalog::ImageHandle;

/// Named handles for every bundled sprite.
///
/// One handle per catalog entry, mirroring the asset naming of the fixture
/// (`golden_1`, `lab_2`, ...). Handles are distinct even where two sprites
/// share artwork.
pub mod handles {
    use crate::catalog::ImageHandle;

    pub const GOLDEN_1: ImageHandle = ImageHandle(1);
    pub const LAB_1: ImageHandle = ImageHandle(2);
    pub const SIB_1: ImageHandle = ImageHandle(3);
    pub const ROT_1: ImageHandle = ImageHandle(4);
    pub const SP_1: ImageHandle = ImageHandle(5);
    pub const GOLDEN_2: ImageHandle = ImageHandle(6);
    pub const LAB_2: ImageHandle = ImageHandle(7);
    pub const SIB_2: ImageHandle = ImageHandle(8);
    pub const ROT_2: ImageHandle = ImageHandle(9);
    pub const SP_2: ImageHandle = ImageHandle(10);
}

/// A displayable ASCII-art bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    /// Asset name, e.g. "golden_1".
    pub name: &'static str,
    /// Art rows, top to bottom.
    pub lines: &'static [&'static str],
}

static GOLDEN_ART: &[&str] = &[
    r"      __      __",
    r"   .-'  \,dog/  '-.",
    r"  /      (o.o)     \",
    r"  \   ___ \=/ ___  /",
    r"   '-/   '---'   \-'",
    r"    (  retriever  )",
    r"     '~~~~~~~~~~~'",
];

static LAB_ART: &[&str] = &[
    r"     /\___/\_",
    r"    ( o   o  \__",
    r"    (  =^=     _)",
    r"     (  lab   /",
    r"     /        \",
    r"    ( |  | |  | )",
    r"     '~~~~~~~~~'",
];

static SIB_ART: &[&str] = &[
    r"    /\      /\",
    r"   /  \____/  \",
    r"  |  (o)  (o)  |",
    r"  |     /\     |",
    r"   \   (--)   /",
    r"    \  husky /",
    r"     '~~~~~~'",
];

static ROT_ART: &[&str] = &[
    r"   ,--.____,--.",
    r"  /  .'    '.  \",
    r"  | (o)    (o) |",
    r"   \    ..    /",
    r"    |  \__/  |",
    r"    | rottie |",
    r"     '~~~~~~'",
];

static SP_ART: &[&str] = &[
    r"    /|      |\",
    r"   / |______| \",
    r"  |  (o)  (o)  |",
    r"   \    ><    /",
    r"    \  \__/  /",
    r"    | shepherd|",
    r"     '~~~~~~~'",
];

/// Placeholder shown when a handle has no registered sprite.
pub static PLACEHOLDER: Sprite = Sprite {
    name: "placeholder",
    lines: &[
        r"  .-----------.",
        r"  |           |",
        r"  |  missing  |",
        r"  |   image   |",
        r"  |           |",
        r"  '-----------'",
    ],
};

static SPRITES: &[(ImageHandle, Sprite)] = &[
    (handles::GOLDEN_1, Sprite { name: "golden_1", lines: GOLDEN_ART }),
    (handles::LAB_1, Sprite { name: "lab_1", lines: LAB_ART }),
    (handles::SIB_1, Sprite { name: "sib_1", lines: SIB_ART }),
    (handles::ROT_1, Sprite { name: "rot_1", lines: ROT_ART }),
    (handles::SP_1, Sprite { name: "sp_1", lines: SP_ART }),
    (handles::GOLDEN_2, Sprite { name: "golden_2", lines: GOLDEN_ART }),
    (handles::LAB_2, Sprite { name: "lab_2", lines: LAB_ART }),
    (handles::SIB_2, Sprite { name: "sib_2", lines: SIB_ART }),
    (handles::ROT_2, Sprite { name: "rot_2", lines: ROT_ART }),
    (handles::SP_2, Sprite { name: "sp_2", lines: SP_ART }),
];

/// Resolve a handle to its bundled sprite.
pub fn resolve(handle: ImageHandle) -> Option<&'static Sprite> {
    SPRITES
        .iter()
        .find(|(h, _)| *h == handle)
        .map(|(_, sprite)| sprite)
}

/// Resolve a handle, falling back to the placeholder sprite.
pub fn resolve_or_placeholder(handle: ImageHandle) -> &'static Sprite {
    resolve(handle).unwrap_or(&PLACEHOLDER)
}
