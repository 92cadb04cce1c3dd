use super::view_model::ProjectDetailsViewModel;
use crate::shared::components::{
    ActionButton, ButtonVariant, FormInput, FormSection, FormSelect, FormTextarea, NoticeBar,
    TextListEditor,
};
use crate::shared::icons::icon;
use contracts::domain::a001_project::form::{field, section, technology_label, TECHNOLOGY_FIELDS};
use contracts::domain::a001_project::limits;
use contracts::domain::a001_project::{ProjectCategory, ProjectStatus};
use leptos::ev;
use leptos::prelude::*;
use thaw::*;
use web_sys::HtmlInputElement;

fn status_options() -> Vec<(&'static str, &'static str)> {
    ProjectStatus::ALL
        .iter()
        .map(|s| (s.as_str(), s.label()))
        .collect()
}

fn category_options() -> Vec<(&'static str, &'static str)> {
    ProjectCategory::ALL
        .iter()
        .map(|c| (c.as_str(), c.label()))
        .collect()
}

/// Project form shared by the create and edit pages
#[component]
pub fn ProjectDetails(vm: ProjectDetailsViewModel) -> impl IntoView {
    let store = vm.store;
    let submitting = vm.submitting;
    let loading = vm.loading;
    let submit_label = vm.submit_label();
    let notice = vm.notice;

    let on_submit = {
        let vm = vm.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            vm.save_command();
        }
    };

    view! {
        <form class="details-form project-form" on:submit=on_submit>
            <NoticeBar notice=notice />

            {move || loading.get().then(|| view! {
                <Flex align=FlexAlign::Center gap=FlexGap::Small>
                    <Spinner />
                    "Loading project..."
                </Flex>
            })}

            <FormSection title="Basic Information">
                <FormInput
                    store=store
                    section=section::BASIC_INFO
                    field=field::TITLE
                    label="Project Title"
                    required=true
                />
                <FormInput
                    store=store
                    section=section::BASIC_INFO
                    field=field::SLUG
                    label="URL Slug"
                    placeholder="e.g., my-awesome-project"
                    required=true
                />
                <FormTextarea
                    store=store
                    section=section::BASIC_INFO
                    field=field::DESCRIPTION
                    label="Description"
                    required=true
                />
            </FormSection>

            <FormSection title="Project Metadata">
                <FormSelect
                    store=store
                    section=section::META
                    field=field::STATUS
                    label="Project Status"
                    options=status_options()
                />
                <FormSelect
                    store=store
                    section=section::META
                    field=field::CATEGORY
                    label="Category"
                    options=category_options()
                />
                <FormInput store=store section=section::META field=field::CLIENT label="Client" />
                <FormInput
                    store=store
                    section=section::META
                    field=field::TIMEFRAME
                    label="Timeframe"
                    placeholder="e.g., Oct 2023 – Jan 2024"
                />
            </FormSection>

            <FormSection title="Project Links">
                <FormInput
                    store=store
                    section=section::LINKS
                    field=field::GITHUB_URL
                    label="GitHub URL"
                    input_type="url"
                    placeholder="https://github.com/your-project"
                />
                <FormInput
                    store=store
                    section=section::LINKS
                    field=field::LIVE_DEMO_URL
                    label="Live Demo URL"
                    input_type="url"
                    placeholder="https://your-project-demo.com"
                />
            </FormSection>

            <FormSection title="Project Overview">
                <FormTextarea
                    store=store
                    section=section::OVERVIEW
                    field=field::CONTEXT
                    label="Context"
                    required=true
                />
                <FormInput
                    store=store
                    section=section::OVERVIEW
                    field=field::TARGET_AUDIENCE
                    label="Target Audience"
                />
                <label class="form__label">"Objectives"</label>
                <TextListEditor
                    store=store
                    section=section::OVERVIEW
                    field=field::OBJECTIVES
                    limits=limits::OBJECTIVES
                    item_label="Objective"
                    add_label="Add Objective"
                    required=true
                />
            </FormSection>

            <FormSection title="Key Features">
                <TextListEditor
                    store=store
                    section=section::FEATURES
                    limits=limits::FEATURES
                    item_label="Feature"
                    add_label="Add Feature"
                />
            </FormSection>

            <FormSection title="Technologies Used">
                {TECHNOLOGY_FIELDS
                    .into_iter()
                    .map(|key| view! {
                        <FormInput
                            store=store
                            section=section::TECHNOLOGIES
                            field=key
                            label=technology_label(key)
                        />
                    })
                    .collect_view()}
            </FormSection>

            <FormSection title="Lessons Learned">
                <TextListEditor
                    store=store
                    section=section::LESSONS_LEARNED
                    limits=limits::LESSONS_LEARNED
                    item_label="Lesson"
                    add_label="Add Lesson"
                />
            </FormSection>

            <FormSection title="Screenshots">
                <ScreenshotPicker vm=vm />
            </FormSection>

            <div class="details-actions">
                <ActionButton
                    submit=true
                    disabled=Signal::derive(move || submitting.get() || loading.get())
                >
                    {icon("save")}
                    {move || if submitting.get() { " Saving..." } else { submit_label }}
                </ActionButton>
            </div>
        </form>
    }
}

/// Kept CMS screenshots plus newly picked files, at most `MAX_SCREENSHOTS` in total
#[component]
fn ScreenshotPicker(vm: ProjectDetailsViewModel) -> impl IntoView {
    let existing = vm.existing_screenshots;
    let new_files = vm.new_screenshots;
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let slots_left = move || {
        limits::remaining_slots(existing.with(Vec::len) + new_files.with(Vec::len))
    };

    let on_change = {
        let vm = vm.clone();
        move |ev: ev::Event| {
            let input: HtmlInputElement = event_target(&ev);
            let picked: Vec<web_sys::File> = input
                .files()
                .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
                .unwrap_or_default();
            vm.add_screenshots(picked);
            // Allow picking the same file again after removing it.
            input.set_value("");
        }
    };

    let remove_existing = {
        let vm = vm.clone();
        move |url: String| vm.remove_existing_screenshot(&url)
    };
    let remove_new = move |index: usize| vm.remove_new_screenshot(index);

    view! {
        <div class="screenshots">
            <ActionButton
                variant=ButtonVariant::Secondary
                disabled=Signal::derive(move || slots_left() == 0)
                on_click=Callback::new(move |_| {
                    if let Some(input) = input_ref.get() {
                        input.click();
                    }
                })
            >
                {icon("image")}
                {move || format!(" Add Screenshots ({} left)", slots_left())}
            </ActionButton>
            <input
                node_ref=input_ref
                type="file"
                accept="image/*"
                multiple=true
                style="display: none;"
                on:change=on_change
            />

            <div class="screenshots__grid">
                {move || {
                    let remove_existing = remove_existing.clone();
                    existing
                        .get()
                        .into_iter()
                        .map(|url| {
                            let remove_existing = remove_existing.clone();
                            let url_for_remove = url.clone();
                            view! {
                                <div class="screenshots__item">
                                    <img class="screenshots__image" src=url alt="Screenshot" />
                                    <button
                                        type="button"
                                        class="screenshots__remove"
                                        aria-label="Remove screenshot"
                                        on:click=move |_| remove_existing(url_for_remove.clone())
                                    >
                                        {icon("x")}
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
                {move || {
                    let remove_new = remove_new.clone();
                    new_files
                        .with(|files| files.iter().map(|f| f.name()).collect::<Vec<_>>())
                        .into_iter()
                        .enumerate()
                        .map(|(index, name)| {
                            let remove_new = remove_new.clone();
                            view! {
                                <div class="screenshots__item screenshots__item--new">
                                    <span class="screenshots__name">{name}</span>
                                    <button
                                        type="button"
                                        class="screenshots__remove"
                                        aria-label="Remove screenshot"
                                        on:click=move |_| remove_new(index)
                                    >
                                        {icon("x")}
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
