//! Shared fixtures for the end-to-end tests.

/// Reference input exercising every precedence level, unknown operators,
/// applications and nested parentheses.
pub const REFERENCE_INPUT: &str = "8 ** 3 . (r <= z != s * 5) /= z + h 17 >= fn a1 a2 ^ m < (8 - q) !! 8 ^^ i || 3 >>= y >> u ??? d / q ++ n 13 : v && l > 19 == 19";

/// Precedence form expected for [`REFERENCE_INPUT`].
pub const REFERENCE_PRECEDENCE_FORM: &str = "{{{{{8**{3.({r<={z!={s*5}}})}}/={{z+{h 17}}>={{{fn a1 a2}^m}<{{({8-q})!!8}^^i}}}}||3}>>=y}>>{{{{u???d}/q}++{{n 13}:v}}&&{l>{19==19}}}}";

/// Depth view expected for [`REFERENCE_INPUT`], one entry per sweep.
pub const REFERENCE_DEPTH_VIEW: [&str; 12] = [
    "                                                                                      >>                                        ",
    "                                                                                >>= y                            &&             ",
    "                                                                           || 3                      ++             l >         ",
    "                           /=                                                                    / q         : v        19 == 19",
    "8 **                                   >=                                                u ??? d        n 13                    ",
    "     3 .                      z +                      <                                                                        ",
    "         (r <=           )        h 17             ^ m                ^^ i                                                      ",
    "               z !=                       fn a1 a2               !! 8                                                           ",
    "                    s * 5                                (8 - q)                                                                ",
    "                                                                                                                                ",
    "                                                                                                                                ",
    "                                                                                                                                ",
];
