//! Pixel-level rendering tests
//!
//! Single-intersection diagrams put the intersection centre at (22.5, 22.5),
//! so pixel (22, 22) sits on it.

use image::{Rgba, RgbaImage};
use sha2::{Digest, Sha256};

use goban::renderer::{surface_size, Renderer, Theme};
use goban::{parse, render};

fn image_of(source: &str) -> RgbaImage {
    render(source)
        .unwrap_or_else(|| panic!("{:?} should render", source))
        .into_image()
}

fn luma(p: Rgba<u8>) -> u32 {
    (299 * p[0] as u32 + 587 * p[1] as u32 + 114 * p[2] as u32) / 1000
}

fn is_red(p: Rgba<u8>) -> bool {
    p[0] > 200 && p[1] < 80 && p[2] < 80
}

fn is_dark(p: Rgba<u8>) -> bool {
    p[0] < 60 && p[1] < 60 && p[2] < 60
}

fn background() -> Rgba<u8> {
    Theme::default().background
}

#[test]
fn test_image_size_follows_grid() {
    let result = render("$$ X O X\n$$ O X O").unwrap();
    assert_eq!((result.width, result.height), (88, 66));
    let image = result.into_image();
    assert_eq!(image.dimensions(), (88, 66));
}

#[test]
fn test_image_size_with_coordinates() {
    let source = "$$c\n$$ +------\n$$ | . . .\n$$ | . . .";
    let diagram = parse(source).unwrap();
    assert_eq!(surface_size(&diagram), (94, 72));
    assert_eq!(image_of(source).dimensions(), (94, 72));
}

#[test]
fn test_background_fill() {
    let image = image_of("$$ _");
    assert_eq!(*image.get_pixel(1, 1), background());
    // blank symbol draws no lines
    assert_eq!(*image.get_pixel(22, 15), background());
}

#[test]
fn test_board_lines() {
    let image = image_of("$$B\n$$ .");
    assert!(is_dark(*image.get_pixel(22, 15)));
    assert!(is_dark(*image.get_pixel(15, 22)));
    assert_eq!(*image.get_pixel(15, 15), background());
}

#[test]
fn test_edges_cut_lines() {
    let image = image_of("$$ +-----+\n$$ | . . |\n$$ | . . |\n$$ +-----+");
    assert_eq!(image.dimensions(), (66, 66));
    // outside the top-left corner
    assert_eq!(*image.get_pixel(22, 15), background());
    assert_eq!(*image.get_pixel(15, 22), background());
    // between the two rows and the two columns
    assert!(is_dark(*image.get_pixel(22, 33)));
    assert!(is_dark(*image.get_pixel(33, 22)));
}

#[test]
fn test_stone_colors() {
    let white = image_of("$$ O");
    let black = image_of("$$ X");
    assert!(luma(*white.get_pixel(22, 22)) > 200);
    assert!(luma(*black.get_pixel(22, 22)) < 80);
}

#[test]
fn test_stone_symbols_share_images() {
    let plain = image_of("$$ X");
    for symbol in ["#", "Y", "Z", "B"] {
        let marked = image_of(&format!("$$ {}", symbol));
        // lower-left rim of the stone, clear of every mark
        assert_eq!(marked.get_pixel(15, 28), plain.get_pixel(15, 28), "{}", symbol);
    }
}

#[test]
fn test_circle_mark() {
    let image = image_of("$$ C");
    assert!(is_red(*image.get_pixel(27, 22)));
    assert!(!is_red(*image.get_pixel(22, 22)));
}

#[test]
fn test_square_mark() {
    let image = image_of("$$ S");
    assert!(is_red(*image.get_pixel(18, 18)));
    assert!(is_red(*image.get_pixel(22, 18)));
    assert!(!is_red(*image.get_pixel(14, 14)));
}

#[test]
fn test_triangle_mark() {
    let image = image_of("$$ T");
    assert!(is_red(*image.get_pixel(22, 24)));
    assert!(!is_red(*image.get_pixel(18, 18)));
}

#[test]
fn test_cross_mark() {
    let image = image_of("$$ M");
    assert!(is_red(*image.get_pixel(18, 18)));
    assert!(!is_red(*image.get_pixel(22, 18)));
}

#[test]
fn test_mark_on_stone() {
    let image = image_of("$$ #");
    assert!(is_red(*image.get_pixel(22, 18)));
    assert!(luma(*image.get_pixel(15, 28)) < 120);
}

#[test]
fn test_composite_stone() {
    let image = image_of("$$ *");
    let right = luma(*image.get_pixel(26, 22));
    let left = luma(*image.get_pixel(18, 22));
    assert!(right > left + 60, "right {} left {}", right, left);
}

#[test]
fn test_numbered_stone_has_label() {
    let plain = image_of("$$ X");
    let numbered = image_of("$$ 1");
    assert_eq!(plain.dimensions(), numbered.dimensions());
    assert_ne!(plain.as_raw(), numbered.as_raw());

    // 1 with black first is a black stone
    assert!(luma(*numbered.get_pixel(15, 28)) < 120);
    // 2 with black first is a white stone
    let second = image_of("$$ 2");
    assert!(luma(*second.get_pixel(15, 28)) > 150);
}

#[test]
fn test_numbered_colour_follows_first_player() {
    let image = image_of("$$W\n$$ 1");
    assert!(luma(*image.get_pixel(15, 28)) > 150);
}

#[test]
fn test_move_offset_changes_label() {
    let first = image_of("$$B\n$$ 1");
    let later = image_of("$$Bm11\n$$ 1");
    assert_ne!(first.as_raw(), later.as_raw());
}

#[test]
fn test_territory_lightens_point() {
    let image = image_of("$$ ?");
    let p = *image.get_pixel(14, 14);
    let bg = background();
    assert!(p[0] > bg[0] && p[1] > bg[1] && p[2] > bg[2]);
    assert_eq!(*image.get_pixel(5, 5), bg);
}

#[test]
fn test_letter_label() {
    let empty = image_of("$$B\n$$ .");
    let lettered = image_of("$$B\n$$ a");
    assert_ne!(empty.as_raw(), lettered.as_raw());
    // lines well clear of the glyph are untouched
    assert!(is_dark(*lettered.get_pixel(22, 12)));
}

#[test]
fn test_star_point() {
    let empty = image_of("$$B\n$$ .");
    let star = image_of("$$ ,");
    assert!(!is_dark(*empty.get_pixel(21, 21)));
    assert!(is_dark(*star.get_pixel(21, 21)));
}

#[test]
fn test_unknown_symbol_draws_lines_only() {
    assert_eq!(image_of("$$B\n$$ !").as_raw(), image_of("$$B\n$$ .").as_raw());
}

#[test]
fn test_border_only_input_renders_nothing() {
    for source in ["$$ +", "$$ |", "$$ -", "$$ ------", ""] {
        assert!(render(source).is_none(), "{:?}", source);
    }
}

#[test]
fn test_caption_passthrough() {
    assert_eq!(
        render("$$W White to kill\n$$ X O").unwrap().caption.as_deref(),
        Some("White to kill")
    );
    assert_eq!(render("$$W\n$$ X O").unwrap().caption, None);
    assert_eq!(render("$$ X O").unwrap().caption, None);
}

#[test]
fn test_coordinates_draw_labels() {
    let with = image_of("$$c\n$$ +----\n$$ | . .\n$$ | . .");
    let bg = background();
    // column letter band above the grid
    let top_band = (20..38).flat_map(|x| (3..13).map(move |y| (x, y)));
    assert!(top_band.into_iter().any(|(x, y)| *with.get_pixel(x, y) != bg));
    // row number band left of the grid
    let left_band = (0..17).flat_map(|x| (22..33).map(move |y| (x, y)));
    assert!(left_band.into_iter().any(|(x, y)| *with.get_pixel(x, y) != bg));
}

#[test]
fn test_custom_theme() {
    let theme = Theme {
        background: Rgba([0, 0, 255, 255]),
        ..Theme::default()
    };
    let result = Renderer::new().with_theme(theme).render("$$ _").unwrap();
    assert_eq!(*result.into_image().get_pixel(1, 1), Rgba([0, 0, 255, 255]));
}

#[test]
fn test_renderer_reuse() {
    let renderer = Renderer::new();
    let a = renderer.render("$$ X O").unwrap().into_image();
    let b = renderer.render("$$ O X").unwrap().into_image();
    let c = renderer.render("$$ X O").unwrap().into_image();
    assert_ne!(a.as_raw(), b.as_raw());
    assert_eq!(a.as_raw(), c.as_raw());
}

#[test]
fn test_render_is_deterministic() {
    let source = std::fs::read_to_string("tests/fixtures/valid/corner.goban").unwrap();
    let digest = |image: RgbaImage| Sha256::digest(image.as_raw());
    assert_eq!(digest(image_of(&source)), digest(image_of(&source)));
}

fn assert_stone_with_mark(symbol: &str, white: bool, mark_pixel: (u32, u32)) {
    let image = image_of(&format!("$$ {}", symbol));
    let rim = luma(*image.get_pixel(15, 28));
    if white {
        assert!(rim > 150, "{}: rim luma {}", symbol, rim);
    } else {
        assert!(rim < 120, "{}: rim luma {}", symbol, rim);
    }
    assert!(is_red(*image.get_pixel(mark_pixel.0, mark_pixel.1)), "{}", symbol);
}

#[test]
fn test_piece_w_white_with_circle() {
    assert_stone_with_mark("W", true, (27, 22));
}

#[test]
fn test_piece_at_white_with_square() {
    assert_stone_with_mark("@", true, (22, 18));
}

#[test]
fn test_piece_q_white_with_triangle() {
    assert_stone_with_mark("Q", true, (22, 24));
}

#[test]
fn test_piece_p_white_with_cross() {
    assert_stone_with_mark("P", true, (18, 18));
}

#[test]
fn test_piece_b_black_with_circle() {
    assert_stone_with_mark("B", false, (27, 22));
}

#[test]
fn test_piece_hash_black_with_square() {
    assert_stone_with_mark("#", false, (22, 18));
}

#[test]
fn test_piece_y_black_with_triangle() {
    assert_stone_with_mark("Y", false, (22, 24));
}

#[test]
fn test_piece_z_black_with_cross() {
    assert_stone_with_mark("Z", false, (18, 18));
}

#[test]
fn test_plain_marks_have_no_stone() {
    for symbol in ["C", "S", "T", "M"] {
        let image = image_of(&format!("$$ {}", symbol));
        assert_eq!(*image.get_pixel(15, 28), background(), "{}", symbol);
    }
}

#[test]
fn test_piece_zero_is_move_ten() {
    let ten = image_of("$$ 0");
    let two = image_of("$$ 2");
    // even move with black first: white stone
    assert!(luma(*ten.get_pixel(15, 28)) > 150);
    assert_ne!(ten.as_raw(), two.as_raw());
    assert_eq!(ten.as_raw(), image_of("$$Bm1\n$$ 0").as_raw());
}

#[test]
fn test_every_digit_renders_a_stone() {
    for digit in '0'..='9' {
        let image = image_of(&format!("$$B\n$$ {}", digit));
        assert_ne!(*image.get_pixel(22, 22), background(), "{}", digit);
    }
}

#[test]
fn test_every_letter_renders_a_label() {
    let empty = image_of("$$B\n$$ .");
    for letter in 'a'..='z' {
        let image = image_of(&format!("$$B\n$$ {}", letter));
        assert_ne!(image.as_raw(), empty.as_raw(), "{}", letter);
        // no stone under a letter
        assert_eq!(*image.get_pixel(5, 5), background(), "{}", letter);
    }
}

#[test]
fn test_boundary_symbols_are_not_pieces() {
    // a boundary only cuts the lines between the two fields
    let bounded = image_of("$$B\n$$ X | O");
    let open = image_of("$$B\n$$ X O");
    assert_eq!(bounded.dimensions(), open.dimensions());
    assert_ne!(bounded.as_raw(), open.as_raw());
    assert!(render("$$B\n$$ + | -").is_none());
}

#[test]
fn test_largest_first_move_renders() {
    let result = render("$$m9223372036854775807\n$$ 0").expect("largest move number renders");
    assert_eq!((result.width, result.height), (44, 44));
    assert_eq!(result.caption, None);
    let image = result.into_image();
    // tenth stone with black first is white
    assert!(luma(*image.get_pixel(15, 28)) > 150);
    assert_ne!(image.as_raw(), image_of("$$ O").as_raw());
}

#[test]
fn test_largest_board_size_without_top_edge() {
    let source = "$$c4294967295\n$$ . |";
    let diagram = parse(source).unwrap();
    assert_eq!(diagram.board_size, Some(u32::MAX));
    assert!(!diagram.coordinates);
    assert_eq!(diagram.left_coordinate, None);

    let result = render(source).expect("renders without coordinates");
    assert_eq!((result.width, result.height), (44, 44));
}

#[test]
fn test_largest_board_size_with_bottom_edge() {
    let source = "$$c4294967295\n$$ . |\n$$ ---";
    let diagram = parse(source).unwrap();
    assert!(diagram.coordinates);
    assert_eq!(diagram.left_coordinate, Some(4_294_967_294));
    assert_eq!(diagram.top_coordinate, Some(0));
    assert_eq!(goban::coords::row_labels(&diagram), vec![1]);
    assert_eq!(goban::coords::column_letters(&diagram), vec![None]);

    let result = render(source).expect("renders with a row label only");
    assert_eq!((result.width, result.height), (50, 50));
    let image = result.into_image();
    let bg = background();
    // row label "1" left of the grid
    let left_band = (0..17).flat_map(|x| (22..33).map(move |y| (x, y)));
    assert!(left_band.into_iter().any(|(x, y)| *image.get_pixel(x, y) != bg));
    // no column letter above it
    let top_band = (20..38).flat_map(|x| (3..13).map(move |y| (x, y)));
    assert!(top_band.into_iter().all(|(x, y)| *image.get_pixel(x, y) == bg));
}
