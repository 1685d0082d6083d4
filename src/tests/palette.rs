use crate::components::palette::{ delay_ms, stagger };

#[test]
fn test_delay_grows_with_index() {
    assert_eq!(delay_ms(400, 100, 0), 400);
    assert_eq!(delay_ms(400, 100, 2), 600);
    assert_eq!(stagger(0, 50, 3), "animation-delay: 150ms;");
}

#[test]
fn test_delay_saturates_instead_of_overflowing() {
    assert_eq!(delay_ms(400, 100, usize::MAX), u32::MAX);
    assert_eq!(delay_ms(u32::MAX, 1, 1), u32::MAX);
    assert_eq!(stagger(0, 50, usize::MAX), format!("animation-delay: {}ms;", u32::MAX));
}
