use super::view_model::TagCategoryDetailsViewModel;
use crate::domain::tag_category::service::use_tag_categories;
use contracts::domain::tag_category::{MetadataField, SelectMode, TagCategory};
use contracts::enums::{PrecisionType, Status};
use leptos::prelude::*;
use std::rc::Rc;

#[component]
#[allow(non_snake_case)]
pub fn TagCategoryDetails(
    /// Record being edited; `None` means the create form
    initial: Option<TagCategory>,
    /// Metadata schema the sub-form renders in create mode
    metadata_config: Vec<MetadataField>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let service = use_tag_categories();
    let vm = match &initial {
        Some(item) => TagCategoryDetailsViewModel::for_edit(item),
        None => TagCategoryDetailsViewModel::for_create(metadata_config),
    };

    let sub_form_config = vm.form.get_untracked().metadata_config;

    // Clone vm for multiple closures
    let vm_clone = vm.clone();

    view! {
        <div class="details-container tag-category-details">
            <div class="details-header">
                <h3>
                    {if vm.is_edit_mode() { "Edit Tag Category" } else { "Create Tag Category" }}
                </h3>
            </div>

            <div class="details-form">
                <div class="form-group">
                    <label for="name">"Name *"</label>
                    <input
                        type="text"
                        id="name"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().name
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.name = event_target_value(&ev));
                            }
                        }
                        placeholder="e.g. Ball"
                    />
                    {
                        let vm = vm_clone.clone();
                        move || vm.error_for("name").map(|message| view! {
                            <span class="badge badge--warning">{message}</span>
                        })
                    }
                </div>

                <div class="form-group">
                    <label for="status">"Status *"</label>
                    <select
                        id="status"
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.status = event_target_value(&ev));
                            }
                        }
                    >
                        {Status::all()
                            .into_iter()
                            .map(|status| {
                                let vm = vm_clone.clone();
                                let code = status.code();
                                view! {
                                    <option value=code selected=move || vm.form.get().status == code>
                                        {code}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="precision">"Precision *"</label>
                    <select
                        id="precision"
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.precision_type = event_target_value(&ev));
                            }
                        }
                    >
                        {PrecisionType::all()
                            .into_iter()
                            .map(|precision| {
                                let vm = vm_clone.clone();
                                let code = precision.code();
                                view! {
                                    <option
                                        value=code
                                        selected=move || vm.form.get().precision_type == code
                                    >
                                        {code}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="group_label">"Group Label *"</label>
                    <input
                        type="text"
                        id="group_label"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().group_label
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.group_label = event_target_value(&ev));
                            }
                        }
                        placeholder="e.g. ball"
                    />
                    {
                        let vm = vm_clone.clone();
                        move || vm.error_for("groupLabel").map(|message| view! {
                            <span class="badge badge--warning">{message}</span>
                        })
                    }
                </div>

                <div class="form-group">
                    <label for="group_value">"Group Value *"</label>
                    <input
                        type="text"
                        id="group_value"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().group_value
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.group_value = event_target_value(&ev));
                            }
                        }
                        placeholder="e.g. ball"
                    />
                    {
                        let vm = vm_clone.clone();
                        move || vm.error_for("groupValue").map(|message| view! {
                            <span class="badge badge--warning">{message}</span>
                        })
                    }
                </div>
            </div>

            <div class="details-subpanel">
                <strong>"Metadata Configuration"</strong>
                <div class="details-form">
                    {sub_form_config
                        .into_iter()
                        .map(|field| metadata_field_view(vm_clone.clone(), field))
                        .collect_view()}
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click={
                        let vm = vm_clone.clone();
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(service, on_saved.clone())
                    }
                >
                    {if vm.is_edit_mode() { "Save changes" } else { "Create" }}
                </button>
                <button
                    class="button button--ghost"
                    on:click=move |_| (on_cancel)(())
                >
                    "Cancel"
                </button>
            </div>
        </div>
    }
}

/// One control of the dynamic sub-form, rendered per its descriptor variant
fn metadata_field_view(vm: TagCategoryDetailsViewModel, field: MetadataField) -> AnyView {
    match field {
        MetadataField::Input {
            key,
            label,
            required,
            input_type,
            read_only,
        } => {
            let value_key = key.clone();
            let input_key = key.clone();
            let vm_value = vm.clone();
            view! {
                <div class="form-group">
                    <label for=key.clone()>
                        {label}
                        {required.then_some(" *")}
                    </label>
                    <input
                        type=input_type.code()
                        id=key
                        readonly=read_only
                        prop:value=move || vm_value.metadata_value(&value_key)
                        on:input=move |ev| vm.set_metadata_value(&input_key, event_target_value(&ev))
                    />
                </div>
            }
            .into_any()
        }

        MetadataField::Select {
            key,
            label,
            required,
            mode: SelectMode::Options { options, multiple },
        } => {
            let change_key = key.clone();
            view! {
                <div class="form-group">
                    <label for=key.clone()>
                        {label}
                        {required.then_some(" *")}
                    </label>
                    <select
                        id=key
                        multiple=multiple
                        on:change=move |ev| {
                            vm.set_metadata_value(&change_key, event_target_value(&ev))
                        }
                    >
                        {(!multiple).then_some(view! { <option value="">"Select…"</option> })}
                        {options
                            .into_iter()
                            .map(|option| view! {
                                <option value=option.value>{option.label}</option>
                            })
                            .collect_view()}
                    </select>
                    <span class="form-help">
                        {if multiple { "Mode: options (multiple)" } else { "Mode: options" }}
                    </span>
                </div>
            }
            .into_any()
        }

        // query mode: descriptor-only placeholder, nothing resolves it
        MetadataField::Select {
            key,
            label,
            required,
            mode: SelectMode::Query { query },
        } => {
            let input_key = key.clone();
            view! {
                <div class="form-group">
                    <label for=key.clone()>
                        {label}
                        {required.then_some(" *")}
                    </label>
                    <input
                        type="text"
                        id=key
                        placeholder=format!("Type to search {query}")
                        on:input=move |ev| {
                            vm.set_metadata_value(&input_key, event_target_value(&ev))
                        }
                    />
                    <span class="form-help">{format!("Query source: {query}")}</span>
                </div>
            }
            .into_any()
        }
    }
}
