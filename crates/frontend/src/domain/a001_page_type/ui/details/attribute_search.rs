//! Поиск атрибутов, которые ещё можно назначить типу страницы

use crate::domain::a001_page_type::api;
use contracts::domain::a002_attribute::Attribute;
use contracts::shared::pagination::{Connection, PageInfo, SearchVariables};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Накопленные страницы результата для текущего запроса
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeSearchState {
    pub variables: SearchVariables,
    pub attributes: Vec<Attribute>,
    pub page_info: PageInfo,
    /// Номер последнего отправленного запроса
    generation: u64,
}

impl AttributeSearchState {
    /// Регистрирует новый запрос; ответы на предыдущие после этого отбрасываются
    pub fn begin_request(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Первая страница (`after == None`) заменяет список, следующие дописываются.
    /// Возвращает false, если ответ устарел.
    pub fn apply_page(
        &mut self,
        generation: u64,
        variables: SearchVariables,
        connection: Connection<Attribute>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        // догрузка для другого текста поиска
        if variables.after.is_some() && variables.query != self.variables.query {
            return false;
        }
        let nodes = connection.nodes();
        if variables.after.is_none() {
            self.attributes = nodes;
        } else {
            self.attributes.extend(nodes);
        }
        self.page_info = connection.page_info;
        self.variables = variables;
        true
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    pub fn has_more(&self) -> bool {
        self.page_info.has_next_page
    }

    pub fn next_variables(&self) -> Option<SearchVariables> {
        self.variables.next_page(&self.page_info)
    }
}

#[derive(Clone, Copy)]
pub struct AvailableAttributeSearch {
    page_type_id: StoredValue<String>,
    pub state: RwSignal<AttributeSearchState>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl AvailableAttributeSearch {
    pub fn new(page_type_id: String) -> Self {
        Self {
            page_type_id: StoredValue::new(page_type_id),
            state: RwSignal::new(AttributeSearchState::default()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn attributes(&self) -> Vec<Attribute> {
        self.state.with(|s| s.attributes.clone())
    }

    pub fn has_more(&self) -> bool {
        self.state.with(|s| s.has_more())
    }

    pub fn query(&self) -> String {
        self.state.with(|s| s.variables.query.clone())
    }

    /// Новый поиск с первой страницы
    pub fn search(&self, query: String) {
        self.fetch(SearchVariables::with_query(query));
    }

    pub fn load_more(&self) {
        if self.loading.get_untracked() {
            return;
        }
        if let Some(variables) = self.state.with_untracked(|s| s.next_variables()) {
            self.fetch(variables);
        }
    }

    fn fetch(&self, variables: SearchVariables) {
        let id = self.page_type_id.get_value();
        let state = self.state;
        let loading = self.loading;
        let error = self.error;

        let generation = state.try_update_untracked(|s| s.begin_request()).unwrap_or_default();
        loading.set(true);
        spawn_local(async move {
            let result = api::search_available_attributes(&id, &variables).await;
            // диалог закрыт, или уже ушёл более новый запрос
            if !state.try_with_untracked(|s| s.is_current(generation)).unwrap_or(false) {
                log::debug!("Dropping stale attribute search response for {:?}", variables.query);
                return;
            }
            match result {
                Ok(response) => {
                    error.set(None);
                    match response.available_attributes {
                        Some(connection) => {
                            state.update(|s| {
                                s.apply_page(generation, variables, connection);
                            });
                        }
                        // тип страницы успели удалить
                        None => state.update(|s| {
                            s.attributes.clear();
                            s.page_info = PageInfo::default();
                        }),
                    }
                }
                Err(e) => {
                    log::error!("Available attributes search failed for {}: {}", id, e);
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::pagination::Edge;

    fn attribute(id: &str) -> Attribute {
        Attribute {
            id: id.to_string(),
            name: format!("Attr {}", id),
            slug: format!("attr-{}", id),
            input_type: Default::default(),
            attribute_type: Default::default(),
        }
    }

    fn connection(ids: &[&str], has_next_page: bool) -> Connection<Attribute> {
        Connection {
            edges: ids
                .iter()
                .map(|id| Edge {
                    cursor: format!("c{}", id),
                    node: attribute(id),
                })
                .collect(),
            page_info: PageInfo {
                has_next_page,
                has_previous_page: false,
                start_cursor: ids.first().map(|id| format!("c{}", id)),
                end_cursor: ids.last().map(|id| format!("c{}", id)),
            },
        }
    }

    fn ids(state: &AttributeSearchState) -> Vec<&str> {
        state.attributes.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_load_more_appends() {
        let mut state = AttributeSearchState::default();
        let first = state.begin_request();
        assert!(state.apply_page(first, SearchVariables::with_query("a"), connection(&["1", "2"], true)));
        assert!(state.has_more());

        let next = state.next_variables().unwrap();
        assert_eq!(next.after.as_deref(), Some("c2"));
        assert_eq!(next.query, "a");

        let second = state.begin_request();
        state.apply_page(second, next, connection(&["3"], false));
        assert_eq!(ids(&state), vec!["1", "2", "3"]);
        assert!(!state.has_more());
        assert_eq!(state.next_variables(), None);
    }

    #[test]
    fn test_new_query_replaces() {
        let mut state = AttributeSearchState::default();
        let first = state.begin_request();
        state.apply_page(first, SearchVariables::with_query("a"), connection(&["1", "2"], false));
        let second = state.begin_request();
        state.apply_page(second, SearchVariables::with_query("b"), connection(&["5"], false));
        assert_eq!(state.attributes.len(), 1);
        assert_eq!(state.variables.query, "b");
    }

    #[test]
    fn test_late_load_more_for_old_query_is_dropped() {
        let mut state = AttributeSearchState::default();
        let first = state.begin_request();
        state.apply_page(first, SearchVariables::with_query("a"), connection(&["a1"], true));

        let more = state.next_variables().unwrap();
        let more_generation = state.begin_request();

        // пользователь ввёл новый текст до ответа на "ещё"
        let search_b = state.begin_request();
        assert!(state.apply_page(search_b, SearchVariables::with_query("b"), connection(&["b1"], false)));

        assert!(!state.apply_page(more_generation, more, connection(&["a2"], false)));
        assert_eq!(ids(&state), vec!["b1"]);
        assert_eq!(state.variables.query, "b");
        assert_eq!(state.next_variables(), None);
    }

    #[test]
    fn test_late_first_page_for_old_query_is_dropped() {
        let mut state = AttributeSearchState::default();
        let search_a = state.begin_request();
        let search_b = state.begin_request();
        state.apply_page(search_b, SearchVariables::with_query("b"), connection(&["b1"], false));

        assert!(!state.apply_page(search_a, SearchVariables::with_query("a"), connection(&["a1"], false)));
        assert_eq!(ids(&state), vec!["b1"]);
        assert!(!state.is_current(search_a));
    }

    #[test]
    fn test_load_more_for_other_query_is_dropped() {
        let mut state = AttributeSearchState::default();
        let first = state.begin_request();
        state.apply_page(first, SearchVariables::with_query("b"), connection(&["b1"], true));

        let mut stale = SearchVariables::with_query("a");
        stale.after = Some("ca1".to_string());
        let generation = state.begin_request();
        assert!(!state.apply_page(generation, stale, connection(&["a2"], false)));
        assert_eq!(ids(&state), vec!["b1"]);
    }
}
