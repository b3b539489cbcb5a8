//! Configuration for rendering and post listings.

#[cfg(feature = "bon")]
use bon::Builder;

#[derive(Default, Debug, Clone)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
/// Umbrella options struct.
pub struct Options {
    /// Configure post rendering.
    pub render: Render,

    /// Configure post listings.
    pub listing: Listing,
}

#[derive(Default, Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
/// Options for rendering post bodies.
pub struct Render {
    /// Prefix prepended to every heading `id` attribute. The anchors in a
    /// table of contents are unaffected.
    ///
    /// ```rust
    /// # use blogmark::{render_post, Options};
    /// let mut options = Options::default();
    /// options.render.id_prefix = "user-content-".to_string();
    /// assert_eq!(render_post("# Hi", &options),
    ///            "<h1 id=\"user-content-hi\">Hi</h1>\n");
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub id_prefix: String,

    /// Emit a self-link inside every heading, for readers to copy.
    ///
    /// ```rust
    /// # use blogmark::{render_post, Options};
    /// let mut options = Options::default();
    /// options.render.anchor_links = true;
    /// assert_eq!(render_post("# Hi", &options),
    ///            "<h1 id=\"hi\"><a href=\"#hi\" aria-hidden=\"true\" class=\"anchor\"></a>Hi</h1>\n");
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub anchor_links: bool,
}

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "bon", derive(Builder))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
/// Options for paging through posts.
pub struct Listing {
    /// Posts per page. Zero is treated as one.
    #[cfg_attr(feature = "bon", builder(default = 5))]
    pub page_size: usize,

    /// Most page numbers shown at once in a pagination bar, not counting the
    /// first/last shortcuts.
    #[cfg_attr(feature = "bon", builder(default = 5))]
    pub max_visible_pages: usize,
}

impl Default for Listing {
    fn default() -> Self {
        Listing {
            page_size: 5,
            max_visible_pages: 5,
        }
    }
}
