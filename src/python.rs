use pyo3::prelude::*;
use pyo3::types::PyDict;
use std::sync::Arc;
use tokio::runtime::Runtime;

use crate::catalog::JsonFileSource;
use crate::core::{Game as RustGame, RelatedResponse as RustRelatedResponse};
use crate::{EngineOptions, RelatedGamesEngine as RustRelatedGamesEngine};

fn runtime_error(e: impl ToString) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string())
}

/// Python wrapper for RelatedGamesEngine
#[pyclass]
struct RelatedGamesEngine {
    engine: Arc<RustRelatedGamesEngine>,
}

#[pymethods]
impl RelatedGamesEngine {
    /// Load the catalog JSON at `catalog_path`
    #[new]
    fn new(catalog_path: String) -> PyResult<Self> {
        let runtime = Runtime::new().map_err(runtime_error)?;

        let engine = runtime.block_on(async {
            let source = JsonFileSource::new(&catalog_path);
            RustRelatedGamesEngine::from_source(&source, EngineOptions::default())
                .await
                .map_err(runtime_error)
        })?;

        Ok(Self {
            engine: Arc::new(engine),
        })
    }

    /// Related games panel for `game_id`
    fn related(&self, game_id: String) -> PyResult<PyObject> {
        let result = self.engine.related(&game_id).map_err(runtime_error)?;
        Python::with_gil(|py| related_response_to_py(py, &result))
    }

    /// "More like this" listing for `game_id`
    fn more_like_this(&self, game_id: String) -> PyResult<PyObject> {
        let result = self.engine.more_like_this(&game_id).map_err(runtime_error)?;
        Python::with_gil(|py| related_response_to_py(py, &result))
    }

    /// Fuzzy title search, returns (id, title, score) tuples
    fn search(&self, query: String, max_results: Option<usize>) -> Vec<(String, String, f64)> {
        self.engine
            .search(&query, max_results.unwrap_or(5))
            .into_iter()
            .map(|m| (m.game.id.clone(), m.game.title.clone(), m.score))
            .collect()
    }

    fn __len__(&self) -> usize {
        self.engine.catalog().len()
    }
}

/// Convert Game to Python dict
fn game_to_py(py: Python, game: &RustGame) -> PyResult<PyObject> {
    let dict = PyDict::new(py);
    dict.set_item("id", &game.id)?;
    dict.set_item("title", &game.title)?;
    dict.set_item("genre", &game.genres)?;
    dict.set_item("developer", &game.developers)?;
    dict.set_item("platforms", &game.platforms)?;
    dict.set_item("rating", &game.rating)?;
    dict.set_item("release_year", game.release_year)?;
    dict.set_item("size", &game.size)?;
    dict.set_item("banner", &game.banner)?;
    dict.set_item("image", &game.image)?;
    Ok(dict.into())
}

/// Convert RelatedResponse to Python dict
fn related_response_to_py(py: Python, response: &RustRelatedResponse) -> PyResult<PyObject> {
    let dict = PyDict::new(py);
    dict.set_item("target", game_to_py(py, &response.target)?)?;

    let games: PyResult<Vec<PyObject>> = response
        .games
        .iter()
        .map(|entry| {
            let item = PyDict::new(py);
            item.set_item("game", game_to_py(py, &entry.game)?)?;
            item.set_item("score", entry.score)?;
            item.set_item("matching_genres", entry.matching_genres)?;
            item.set_item("reason", format!("{:?}", entry.reason))?;
            Ok(item.into())
        })
        .collect();
    dict.set_item("games", games?)?;

    dict.set_item("policy", &response.policy)?;
    dict.set_item("latency_ms", response.latency_ms)?;

    Ok(dict.into())
}

/// Python module
#[pymodule]
fn related_games_engine(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<RelatedGamesEngine>()?;
    m.add("__version__", crate::VERSION)?;
    Ok(())
}
