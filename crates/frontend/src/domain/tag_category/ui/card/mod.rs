use crate::shared::components::ui::{Badge, Button};
use contracts::domain::tag_category::TagCategory;
use leptos::prelude::*;

/// One tag category rendered as a card in the list grid
#[component]
#[allow(non_snake_case)]
pub fn TagCategoryCard(
    item: TagCategory,
    on_edit: Callback<TagCategory>,
    on_delete: Callback<TagCategory>,
) -> impl IntoView {
    let status_code = item.status.code();
    let status_variant = match item.status.code() {
        "ACTIVE" => "success",
        _ => "warning",
    };
    let precision_summary = format!("Precision: {}", item.precision_type.code());
    let group_summary =
        (!item.group.label.is_empty()).then(|| format!("Group: {}", item.group.label));
    let deleted = item.deleted;

    let field_summary = {
        let labels: Vec<&str> = item
            .metadata_config
            .iter()
            .map(|field| field.label())
            .collect();
        if labels.is_empty() {
            "—".to_string()
        } else {
            labels.join(", ")
        }
    };

    let sub_category_summary = (!item.sub_categories.is_empty()).then(|| {
        item.sub_categories
            .values()
            .map(|sub| sub.label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    });

    let title = item.name.clone();
    let edit_item = item.clone();
    let delete_item = item;

    view! {
        <div class="card">
            <div class="card__header">
                <div>
                    <div class="card__title">{title}</div>
                    <div class="card__meta">
                        <Badge variant=status_variant.to_string()>{status_code}</Badge>
                        <Badge>{precision_summary}</Badge>
                        {group_summary.map(|summary| view! { <Badge>{summary}</Badge> })}
                        {deleted.then(|| view! { <Badge variant="error".to_string()>"DELETED"</Badge> })}
                    </div>
                </div>
                <div class="card__actions">
                    <Button
                        variant="secondary".to_string()
                        on_click=Callback::new(move |_| on_edit.run(edit_item.clone()))
                    >
                        "Edit"
                    </Button>
                    <Button
                        variant="danger".to_string()
                        on_click=Callback::new(move |_| on_delete.run(delete_item.clone()))
                    >
                        "Delete"
                    </Button>
                </div>
            </div>

            <div class="card__meta">
                <div class="card__kv">
                    <strong>"Fields: "</strong>
                    {field_summary}
                </div>
                {sub_category_summary.map(|summary| view! {
                    <div class="card__kv">
                        <strong>"Subcategories: "</strong>
                        {summary}
                    </div>
                })}
            </div>
        </div>
    }
}
