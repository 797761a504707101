//! Compose Reply - View Component

use super::api::generate_reply;
use super::view_model::ComposeReplyVm;
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::file_reader::read_as_data_url;
use crate::shared::icons::icon;
use crate::shared::logger::report_error;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_compose_reply::messages::{COPIED_RESET_MS, SCROLL_DELAY_MS};
use contracts::usecases::u101_compose_reply::{
    ComposeReply, ImageAttachment, OperationState, ReplyFormState,
};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
#[allow(non_snake_case)]
pub fn ComposeReplyPage() -> impl IntoView {
    let vm = ComposeReplyVm::new();
    let file_input_ref = NodeRef::<leptos::html::Input>::new();
    let result_ref = NodeRef::<leptos::html::Div>::new();

    let scroll_to_result = move || {
        Timeout::new(SCROLL_DELAY_MS, move || {
            if let Some(el) = result_ref.get_untracked() {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                el.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })
        .forget();
    };

    let handle_file_change = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        let Ok(seq) = vm.update(|s| s.begin_attach(&file.type_())) else {
            input.set_value("");
            return;
        };

        wasm_bindgen_futures::spawn_local(async move {
            match read_as_data_url(&file).await {
                Ok(data_url) => {
                    let attachment = ImageAttachment::new(file.name(), file.type_(), data_url);
                    vm.update(|s| s.attach_image(seq, attachment));
                }
                Err(e) => {
                    report_error("u101", &e);
                    if vm.update(|s| s.attach_failed(seq)) {
                        input.set_value("");
                    }
                }
            }
        });
    };

    let handle_remove_image = move |_: leptos::ev::MouseEvent| {
        vm.update(ReplyFormState::remove_image);
        if let Some(input) = file_input_ref.get_untracked() {
            input.set_value("");
        }
    };

    let handle_pick_file = move |_: leptos::ev::MouseEvent| {
        if let Some(input) = file_input_ref.get_untracked() {
            input.click();
        }
    };

    let handle_submit = Callback::new(move |_: ()| {
        let Some((seq, request)) = vm.update(|s| s.begin_submit()) else {
            return;
        };

        wasm_bindgen_futures::spawn_local(async move {
            match generate_reply(&request).await {
                Ok(response) => {
                    if vm.update(|s| s.finish_success(seq, response.reply)) {
                        scroll_to_result();
                    }
                }
                Err(e) => {
                    report_error("u101", &format!("Reply generation failed: {}", e));
                    vm.update(|s| s.finish_failure(seq));
                }
            }
        });
    });

    let handle_copy = move |_: leptos::ev::MouseEvent| {
        let Some(text) = vm.update(|s| s.copy_text().map(str::to_string)) else {
            return;
        };
        copy_to_clipboard_with_callback(&text, move || {
            vm.update(ReplyFormState::mark_copied);
            Timeout::new(COPIED_RESET_MS, move || {
                vm.update(ReplyFormState::reset_copied);
            })
            .forget();
        });
    };

    view! {
        <div class="compose-page">
            <main class="compose-page__main">
                <header class="compose-page__header">
                    <div class="compose-page__badge">{icon("bot")}</div>
                    <h1 class="compose-page__title">{ComposeReply::display_name()}</h1>
                    <p class="compose-page__subtitle">{ComposeReply::description()}</p>
                </header>

                <div class="card">
                    <Flex vertical=true style="gap: 24px;">
                        <div>
                            // thaw puts attr:id on its wrapper, so the label wraps the field
                            <label class="form__field">
                                <span class="form__label">"1. Tuliskan keluhan atau lampirkan foto:"</span>
                                <Textarea
                                    value=vm.complaint
                                    placeholder="Contoh: Pesanan saya belum sampai padahal sudah lewat estimasi..."
                                    attr:style="width: 100%; min-height: 112px; resize: none;"
                                    disabled=vm.is_loading
                                />
                            </label>

                            <input
                                type="file"
                                accept="image/*"
                                style="display: none;"
                                node_ref=file_input_ref
                                disabled=move || vm.is_loading.get()
                                on:change=handle_file_change
                            />

                            <div style="margin-top: 8px;">
                                {move || match vm.image.get() {
                                    None => view! {
                                        <Button
                                            appearance=ButtonAppearance::Secondary
                                            size=ButtonSize::Small
                                            disabled=vm.is_loading
                                            on_click=handle_pick_file
                                        >
                                            {icon("attach")}
                                            " Lampirkan Foto (Opsional)"
                                        </Button>
                                    }.into_any(),
                                    Some(image) => view! {
                                        <div class="image-preview">
                                            <img
                                                src=image.data_url
                                                alt="Pratinjau Komplain"
                                                title=image.file_name
                                                class="image-preview__img"
                                            />
                                            <button
                                                type="button"
                                                class="image-preview__remove"
                                                aria-label="Hapus gambar"
                                                on:click=handle_remove_image
                                            >
                                                {icon("close")}
                                            </button>
                                        </div>
                                    }.into_any(),
                                }}
                            </div>
                        </div>

                        <div>
                            <label class="form__field">
                                <span class="form__label">"2. Masukkan inti jawaban Anda:"</span>
                                <Textarea
                                    value=vm.core_answer
                                    placeholder="Contoh: Kami akan kirim ulang barangnya hari ini juga."
                                    attr:style="width: 100%; min-height: 112px; resize: none;"
                                    disabled=vm.is_loading
                                />
                            </label>
                        </div>

                        <Flex justify=FlexJustify::End>
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=Signal::derive(move || !vm.can_submit())
                                on_click=move |_| handle_submit.run(())
                            >
                                {move || {
                                    if vm.is_loading.get() {
                                        view! { {icon("spinner")} " Memproses" }.into_any()
                                    } else {
                                        view! { {icon("sparkles")} " Generate Jawaban" }.into_any()
                                    }
                                }}
                            </Button>
                        </Flex>
                    </Flex>
                </div>

                // Error banner
                {move || match vm.status() {
                    OperationState::Error(message) => Some(view! {
                        <div class="alert alert--error" role="alert">
                            {icon("alert")}
                            <span>{message}</span>
                        </div>
                    }),
                    _ => None,
                }}

                // Result
                <Show when=move || matches!(vm.status(), OperationState::Loading | OperationState::Success(_))>
                    <div class="card card--result" node_ref=result_ref>
                        <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 16px;">
                            <h2 class="card__title">
                                {icon("sparkles")}
                                " Jawaban dari Asisten AI"
                            </h2>
                            <Show when=move || matches!(vm.status(), OperationState::Success(_))>
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    size=ButtonSize::Small
                                    on_click=handle_copy
                                >
                                    {move || {
                                        if vm.is_copied.get() {
                                            view! { {icon("check")} " Tersalin!" }.into_any()
                                        } else {
                                            view! { {icon("clipboard")} " Salin" }.into_any()
                                        }
                                    }}
                                </Button>
                            </Show>
                        </Flex>

                        {move || match vm.status() {
                            OperationState::Success(reply) => view! {
                                <div style="white-space: pre-wrap;">{reply}</div>
                            }.into_any(),
                            _ => view! {
                                <div class="skeleton">
                                    <div class="skeleton__line" style="width: 100%;"></div>
                                    <div class="skeleton__line" style="width: 83%;"></div>
                                    <div class="skeleton__line" style="width: 100%;"></div>
                                    <div class="skeleton__line" style="width: 75%;"></div>
                                </div>
                            }.into_any(),
                        }}
                    </div>
                </Show>
            </main>

            <footer class="compose-page__footer">
                "Dibuat dengan Rust, Leptos, dan Gemini API."
            </footer>
        </div>
    }
}
