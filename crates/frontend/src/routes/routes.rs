use crate::domain::a001_page_type::ui::details::PageTypeDetailsPage;
use crate::domain::a001_page_type::ui::list::PageTypeList;
use crate::domain::a001_page_type::urls::PAGE_TYPE_SECTION;
use crate::domain::a002_attribute::ui::details::AttributeDetails;
use crate::domain::a002_attribute::urls::ATTRIBUTE_SECTION;
use crate::domain::a001_page_type::urls::page_type_list_url;
use crate::shared::components::not_found_page::NotFoundPage;
use crate::shared::navigator::use_navigator;
use leptos::prelude::*;
// Router components не используются: маршрут выводится из пути в Navigator

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    PageTypeList,
    PageTypeDetails(String),
    AttributeDetails(String),
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        if path.is_empty() || path == PAGE_TYPE_SECTION {
            return Route::PageTypeList;
        }
        if let Some(id) = section_id(path, PAGE_TYPE_SECTION) {
            return Route::PageTypeDetails(id);
        }
        if let Some(id) = section_id(path, ATTRIBUTE_SECTION) {
            return Route::AttributeDetails(id);
        }
        Route::NotFound
    }
}

/// `/section/<id>` -> decoded id; вложенные пути не принимаются
fn section_id(path: &str, section: &str) -> Option<String> {
    let rest = path.strip_prefix(section)?.strip_prefix('/')?;
    if rest.is_empty() || rest.contains('/') {
        return None;
    }
    urlencoding::decode(rest).ok().map(|id| id.into_owned())
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let navigator = use_navigator();
    let route = Memo::new(move |_| Route::parse(&navigator.path()));

    view! {
        <main class="app-main">
            {move || match route.get() {
                Route::PageTypeList => view! { <PageTypeList /> }.into_any(),
                Route::PageTypeDetails(id) => view! { <PageTypeDetailsPage id=id /> }.into_any(),
                Route::AttributeDetails(id) => view! { <AttributeDetails id=id /> }.into_any(),
                Route::NotFound => view! {
                    <NotFoundPage on_back=Callback::new(move |_| {
                        navigator.navigate(&page_type_list_url(), false)
                    }) />
                }.into_any(),
            }}
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse("/"), Route::PageTypeList);
        assert_eq!(Route::parse("/page-types"), Route::PageTypeList);
        assert_eq!(Route::parse("/page-types/"), Route::PageTypeList);
        assert_eq!(
            Route::parse("/page-types/5"),
            Route::PageTypeDetails("5".to_string())
        );
        assert_eq!(
            Route::parse("/attributes/a%20b"),
            Route::AttributeDetails("a b".to_string())
        );
    }

    #[test]
    fn test_parse_unknown_routes() {
        assert_eq!(Route::parse("/orders"), Route::NotFound);
        assert_eq!(Route::parse("/page-types/5/extra"), Route::NotFound);
        assert_eq!(Route::parse("/page-typesX"), Route::NotFound);
    }
}
