use crate::image::collect_game_images;
use crate::types::{Game, GameSearchResult, GamesByPlatformResult, SimilarTitle};
use crate::util::parse_int_or;
use crate::xml::XmlElement;

/// Map the field list of a single `<Game>` element.
///
/// Each child is dispatched on its tag name. Tags this mapper doesn't know
/// are skipped, so additions to the server schema don't break anything. An
/// unparsable `id` keeps the previous value.
pub fn map_game(element: &XmlElement) -> Game {
    let mut game = Game::default();

    for child in element.elements() {
        match child.name() {
            "id" => game.id = parse_int_or(&child.inner_text(), game.id),
            "GameTitle" => game.title = child.inner_text(),
            // The server spells this both ways depending on the endpoint.
            "Overview" | "overview" => game.overview = child.inner_text(),
            "Platform" => game.platform = child.inner_text(),
            "ReleaseDate" => game.release_date = child.inner_text(),
            "ESRB" => game.esrb = child.inner_text(),
            "Players" => game.players = child.inner_text(),
            "Co-op" => game.co_op = child.inner_text(),
            "Youtube" => game.youtube = child.inner_text(),
            "Publisher" => game.publisher = child.inner_text(),
            "Developer" => game.developer = child.inner_text(),
            "Rating" => game.rating = child.inner_text(),
            "AlternateTitles" => game
                .alternate_titles
                .extend(child.elements().map(XmlElement::inner_text)),
            "Genres" => game
                .genres
                .extend(child.elements().map(XmlElement::inner_text)),
            "Images" => collect_game_images(&mut game.images, child),
            "Similar" => game.similar_titles.extend(
                child
                    .elements()
                    .filter(|e| e.name() == "Game")
                    .map(map_similar_title),
            ),
            _ => {}
        }
    }

    game
}

/// Map one `<Game>` entry of a `<Similar>` block.
pub fn map_similar_title(element: &XmlElement) -> SimilarTitle {
    let mut similar = SimilarTitle::default();

    for child in element.elements() {
        match child.name() {
            "id" => similar.game_id = parse_int_or(&child.inner_text(), similar.game_id),
            "PlatformId" => {
                similar.platform_id = parse_int_or(&child.inner_text(), similar.platform_id)
            }
            _ => {}
        }
    }

    similar
}

/// Map one `<Game>` hit from a search listing.
pub fn map_game_search_result(element: &XmlElement) -> GameSearchResult {
    let mut result = GameSearchResult::default();

    for child in element.elements() {
        match child.name() {
            "id" => result.id = parse_int_or(&child.inner_text(), result.id),
            "GameTitle" => result.title = child.inner_text(),
            "ReleaseDate" => result.release_date = child.inner_text(),
            "Platform" => result.platform = child.inner_text(),
            _ => {}
        }
    }

    result
}

/// Map one `<Game>` entry from a platform's game listing.
pub fn map_games_by_platform_result(element: &XmlElement) -> GamesByPlatformResult {
    let mut result = GamesByPlatformResult::default();

    for child in element.elements() {
        match child.name() {
            "id" => result.id = parse_int_or(&child.inner_text(), result.id),
            "GameTitle" => result.title = child.inner_text(),
            "ReleaseDate" => result.release_date = child.inner_text(),
            _ => {}
        }
    }

    result
}

/// Search results: every child of the root is one hit, in document order.
pub fn game_search_results(root: &XmlElement) -> Vec<GameSearchResult> {
    root.elements().map(map_game_search_result).collect()
}

/// Platform game listing: every child of the root is one game.
pub fn platform_games_from_document(root: &XmlElement) -> Vec<GamesByPlatformResult> {
    root.elements().map(map_games_by_platform_result).collect()
}

/// Single-game response. The root first carries `<baseImgUrl>`, the game is
/// the element after it. Returns `None` when the server sent no game.
pub fn game_from_document(root: &XmlElement) -> Option<Game> {
    root.elements().nth(1).map(map_game)
}

#[cfg(test)]
#[path = "tests/game_tests.rs"]
mod tests;
