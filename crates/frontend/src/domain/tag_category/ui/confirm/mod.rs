use crate::domain::tag_category::service::use_tag_categories;
use crate::shared::components::ui::Button;
use contracts::domain::tag_category::DeleteConfirmation;
use leptos::prelude::*;

/// Modal shown while a soft deletion is pending confirmation.
///
/// Renders nothing in the idle state; clicking the overlay cancels, same as
/// the Cancel button.
#[component]
#[allow(non_snake_case)]
pub fn DeleteConfirmationModal() -> impl IntoView {
    let service = use_tag_categories();

    view! {
        {move || match service.confirm.get() {
            DeleteConfirmation::Pending { name, .. } => Some(view! {
                <div
                    class="modal-overlay"
                    on:click=move |_| service.cancel_delete()
                >
                    <div
                        class="modal-content"
                        on:click=|e| e.stop_propagation()
                    >
                        <h3>{format!("Delete \u{201c}{name}\u{201d}")}</h3>
                        <p class="subtle">
                            "This will mark the item as deleted (soft delete). Proceed?"
                        </p>
                        <div class="modal-actions">
                            <Button
                                variant="ghost".to_string()
                                on_click=Callback::new(move |_| service.cancel_delete())
                            >
                                "Cancel"
                            </Button>
                            <Button
                                variant="danger".to_string()
                                on_click=Callback::new(move |_| service.confirm_delete())
                            >
                                "Delete"
                            </Button>
                        </div>
                    </div>
                </div>
            }),
            DeleteConfirmation::Idle => None,
        }}
    }
}
