use crate::domain::tag_category::service::use_tag_categories;
use crate::domain::tag_category::ui::card::TagCategoryCard;
use crate::domain::tag_category::ui::confirm::DeleteConfirmationModal;
use crate::domain::tag_category::ui::details::TagCategoryDetails;
use crate::shared::components::ui::{Button, Input, Select};
use contracts::domain::tag_category::TagCategory;
use contracts::enums::StatusFilter;
use leptos::prelude::*;
use std::rc::Rc;

#[derive(Clone)]
enum FormRequest {
    Create,
    Edit(TagCategory),
}

/// Tag category list page: search and status controls, the card grid, the
/// create/edit form and the delete-confirmation modal
#[component]
#[allow(non_snake_case)]
pub fn TagCategoryList() -> impl IntoView {
    let service = use_tag_categories();
    let (show_form, set_show_form) = signal::<Option<FormRequest>>(None);

    let status_options = RwSignal::new(
        StatusFilter::all()
            .into_iter()
            .map(|choice| (choice.code().to_string(), choice.display_name().to_string()))
            .collect::<Vec<_>>(),
    );

    view! {
        <div class="container list-page">
            <header class="list-page__header">
                <div>
                    <h1 class="list-page__title">"Tag Categories"</h1>
                    <div class="subtle">"Create, edit, and manage complex tag categories"</div>
                </div>
                <Button on_click=Callback::new(move |_| {
                    set_show_form.set(Some(FormRequest::Create))
                })>
                    "+ New Category"
                </Button>
            </header>

            <div class="list-page__controls">
                <Input
                    value=Signal::derive(move || service.query.get())
                    on_input=Callback::new(move |value: String| service.query.set(value))
                    placeholder="Search by name or group…".to_string()
                />
                <Select
                    value=Signal::derive(move || service.status_filter.get().code().to_string())
                    options=status_options
                    on_change=Callback::new(move |code: String| {
                        if let Some(choice) = StatusFilter::from_code(&code) {
                            service.status_filter.set(choice);
                        }
                    })
                />
            </div>

            {move || show_form.get().map(|request| {
                let (initial, metadata_config) = match request {
                    // the create form starts from the first record's schema
                    FormRequest::Create => (None, service.default_metadata_config()),
                    FormRequest::Edit(item) => {
                        let config = item.metadata_config.clone();
                        (Some(item), config)
                    }
                };
                view! {
                    <TagCategoryDetails
                        initial=initial
                        metadata_config=metadata_config
                        on_saved=Rc::new(move |_| set_show_form.set(None))
                        on_cancel=Rc::new(move |_| set_show_form.set(None))
                    />
                }
            })}

            <section class="card-grid">
                {move || {
                    let filtered = service.filtered();
                    if filtered.is_empty() {
                        view! {
                            <div class="panel">"No results. Try adjusting filters."</div>
                        }
                        .into_any()
                    } else {
                        filtered
                            .into_iter()
                            .map(|item| view! {
                                <TagCategoryCard
                                    item=item
                                    on_edit=Callback::new(move |item| {
                                        set_show_form.set(Some(FormRequest::Edit(item)))
                                    })
                                    on_delete=Callback::new(move |item: TagCategory| {
                                        service.request_delete(&item)
                                    })
                                />
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </section>

            <DeleteConfirmationModal />
        </div>
    }
}
