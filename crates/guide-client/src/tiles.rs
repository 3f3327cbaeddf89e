//! Tile rendering contract
//!
//! One tile per grand category, in sequence order. Renderers decide what a
//! tile is (a Leptos view in the browser, anything in tests).

use crate::domain::GrandCategory;

pub trait TileRenderer {
    type Output;

    fn tile(&mut self, grand: &GrandCategory) -> Self::Output;
}

impl<F, O> TileRenderer for F
where
    F: FnMut(&GrandCategory) -> O,
{
    type Output = O;

    fn tile(&mut self, grand: &GrandCategory) -> O {
        self(grand)
    }
}

pub fn render_tiles<R: TileRenderer + ?Sized>(grands: &[GrandCategory], renderer: &mut R) -> Vec<R::Output> {
    grands.iter().map(|grand| renderer.tile(grand)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grand(title: &str) -> GrandCategory {
        GrandCategory { title: title.into(), finished: vec![], wip: vec![], stubs: vec![] }
    }

    struct CountingRenderer {
        calls: usize,
    }

    impl TileRenderer for CountingRenderer {
        type Output = (usize, String);

        fn tile(&mut self, grand: &GrandCategory) -> Self::Output {
            self.calls += 1;
            (self.calls, grand.title.clone())
        }
    }

    #[test]
    fn test_one_tile_per_grand_in_order() {
        let grands = vec![grand("Web"), grand("Testing"), grand("Parsing")];
        let mut renderer = CountingRenderer { calls: 0 };

        let tiles = render_tiles(&grands, &mut renderer);

        assert_eq!(renderer.calls, 3);
        assert_eq!(
            tiles,
            vec![(1, "Web".to_string()), (2, "Testing".to_string()), (3, "Parsing".to_string())]
        );
    }

    #[test]
    fn test_closure_renderer() {
        let grands = vec![grand("Web")];
        let tiles = render_tiles(&grands, &mut |g: &GrandCategory| g.title.len());
        assert_eq!(tiles, vec![3]);
    }

    #[test]
    fn test_empty_renders_nothing() {
        let mut renderer = CountingRenderer { calls: 0 };
        assert!(render_tiles(&[], &mut renderer).is_empty());
        assert_eq!(renderer.calls, 0);
    }
}
