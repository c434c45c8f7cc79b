use crate::domain::tag_category::service::TagCategoryService;
use crate::domain::tag_category::ui::list::TagCategoryList;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the store-owning service to the whole app via context.
    provide_context(TagCategoryService::new());

    view! {
        <TagCategoryList />
    }
}
