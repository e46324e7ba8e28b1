// Page hooks the host binds to. Selectors, ids, classes and CSS variable names
// shared with the site's stylesheet.

// Cursor follower
pub const FOLLOWER_ID: &str = "cursor-follower";
pub const INTERACTIVE_SELECTOR: &str = "a, button, .card, input, textarea";
pub const HOVERING_CLICKABLE_CLASS: &str = "hovering-clickable";
pub const BG_X_VAR: &str = "--bg-x"; // ambient pointer, percent of viewport
pub const BG_Y_VAR: &str = "--bg-y";

// Card tilt
pub const CARD_SELECTOR: &str = ".card";
pub const CARD_KEY_ATTR: &str = "data-motion-key"; // stamped on bound cards
pub const SPOT_X_VAR: &str = "--mouse-x"; // pointer offset inside the card, px
pub const SPOT_Y_VAR: &str = "--mouse-y";

// Capability queries
pub const FINE_POINTER_QUERY: &str = "(pointer: fine)";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Flip clock
pub const CLOCK_SELECTOR: &str = ".mini-flip-clock";
pub const CLOCK_HOURS_ID: &str = "clock-h";
pub const CLOCK_MINUTES_ID: &str = "clock-m";
pub const FLIP_TOP: &str = ".top";
pub const FLIP_BOTTOM: &str = ".bottom";
pub const FLIP_TOP_FLIP: &str = ".top-flip";
pub const FLIP_BOTTOM_FLIP: &str = ".bottom-flip";
pub const FLIPPING_CLASS: &str = "flipping";

// Logo swap
pub const LOGO_SELECTOR: &str = ".nav-logo";
pub const LOGO_REVERSED_CLASS: &str = "reversed";
pub const LOGO_ICON_SELECTOR: &str = "i";
pub const LOGO_SPIN_ANIMATION: &str = "logo-spin 0.6s ease-in-out";
