/// DOM contract and page timing for the web front-end.
///
/// Kept free of web-sys types so the host tests can `include!` it.
// Page screens, shown one at a time
pub const LOADING_ID: &str = "loading";
pub const INTRO_ID: &str = "intro";
pub const CONTENT_ID: &str = "content";

// Intro overlay
pub const INTRO_CANVAS_ID: &str = "intro-canvas";
pub const INTRO_TITLE_ID: &str = "intro-title";
pub const INTRO_SUFFIX_ID: &str = "intro-suffix";
pub const INTRO_PREFIX_ID: &str = "intro-prefix";

// Content view
pub const STARFIELD_CANVAS_ID: &str = "starfield-canvas";
pub const SECTIONS_CONTAINER_ID: &str = "sections-container";
pub const HEADER_ID: &str = "site-header";
pub const MENU_TOGGLE_ID: &str = "menu-toggle";
pub const MOBILE_NAV_ID: &str = "mobile-nav";

pub const NAV_LINK_SELECTOR: &str = "a[data-section]";
pub const NAV_LINK_ATTR: &str = "data-section";
pub const SECTION_SELECTOR: &str = "section[id]";

// Section reveal observer: every section, not only the linked ones
pub const REVEAL_SELECTOR: &str = "section";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "-50px";

// Class names toggled by the front-end
pub const HIDDEN_CLASS: &str = "hidden";
pub const VISIBLE_CLASS: &str = "visible";
pub const ACTIVE_CLASS: &str = "active";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const MENU_OPEN_CLASS: &str = "open";

// Simulated resource loading before the intro starts (ms)
pub const LOADING_DELAY_MS: u64 = 1000;

// Overlay word fade (CSS transition, seconds)
pub const WORD_FADE_SEC: f32 = 0.5;
// Distance a hidden word waits from its place: title below, suffix right, prefix left
pub const WORD_ENTRY_OFFSET_PX: f32 = 50.0;
// Intro screen fade-out once the reveal completes (seconds)
pub const INTRO_EXIT_FADE_SEC: f32 = 0.8;

pub const GLYPH_FONT_FAMILY: &str = "Arial";

// Welcome toast
pub const TOAST_ID: &str = "welcome-toast";
pub const TOAST_CLASS: &str = "toast";
pub const TOAST_TITLE_CLASS: &str = "toast-title";
pub const TOAST_DESCRIPTION_CLASS: &str = "toast-description";
pub const TOAST_DURATION_MS: u64 = 4000;
pub const TOAST_FADE_SEC: f32 = 0.4;

pub const WELCOME_TITLE: &str = "Welcome to Mazen's Portfolio";
pub const WELCOME_DESCRIPTION: &str = "Explore my work and experience.";
