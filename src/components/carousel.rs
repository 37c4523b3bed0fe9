//! Photo carousel: `tiles` cover-fit slides per view, prev/next stepping
//! and clickable pagination dots.

use yew::prelude::*;

/// Window of slide indices visible for a cursor position. The cursor is
/// clamped so the window never runs past the end of the image list.
pub fn visible_range(len: usize, tiles: u32, cursor: usize) -> std::ops::Range<usize> {
    let tiles = tiles.max(1) as usize;
    let start = cursor.min(len.saturating_sub(tiles));
    start..(start + tiles).min(len)
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub images: Vec<String>,
    pub tiles: u32,
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let cursor = use_state(|| 0usize);

    let len = props.images.len();
    if len == 0 {
        return html! { <div class="carousel empty">{ "No photos yet." }</div> };
    }

    let range = visible_range(len, props.tiles, *cursor);
    let max_start = len.saturating_sub(props.tiles.max(1) as usize);

    let on_prev = {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| cursor.set(cursor.saturating_sub(1)))
    };
    let on_next = {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| cursor.set((*cursor + 1).min(max_start)))
    };

    html! {
        <div class="carousel">
            <div class="slides">
                { for props.images[range.clone()].iter().map(|url| html! {
                    <div
                        class="slide"
                        style={format!(
                            "background: url({}) center no-repeat; background-size: cover; min-height: 20rem;",
                            url
                        )}
                    ></div>
                }) }
            </div>
            if len > range.len() {
                <div class="carousel-nav">
                    <button onclick={on_prev} disabled={range.start == 0}>{ "‹" }</button>
                    <button onclick={on_next} disabled={range.start == max_start}>{ "›" }</button>
                </div>
            }
            <div class="dots">
                { for (0..len).map(|i| {
                    let cursor = cursor.clone();
                    let onclick = Callback::from(move |_: MouseEvent| cursor.set(i.min(max_start)));
                    let class = if range.contains(&i) { "dot active" } else { "dot" };
                    html! { <span {class} {onclick}></span> }
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_starts_at_cursor() {
        assert_eq!(visible_range(5, 3, 0), 0..3);
        assert_eq!(visible_range(5, 3, 1), 1..4);
        assert_eq!(visible_range(5, 1, 2), 2..3);
    }

    #[test]
    fn cursor_clamps_at_the_end() {
        assert_eq!(visible_range(5, 3, 4), 2..5);
        assert_eq!(visible_range(5, 1, 99), 4..5);
    }

    #[test]
    fn short_lists_show_everything() {
        assert_eq!(visible_range(2, 3, 0), 0..2);
        assert_eq!(visible_range(2, 3, 1), 0..2);
    }

    #[test]
    fn empty_list_yields_empty_window() {
        assert_eq!(visible_range(0, 3, 0), 0..0);
        assert_eq!(visible_range(0, 1, 5), 0..0);
    }

    #[test]
    fn growing_tiles_pulls_a_late_cursor_back() {
        // Cursor sat at the last single-tile position, then the viewport
        // widened to three tiles.
        assert_eq!(visible_range(5, 1, 4), 4..5);
        assert_eq!(visible_range(5, 3, 4), 2..5);
    }
}
