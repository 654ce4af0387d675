//! Upload control feeding the shared file registry.
//!
//! Only file names and sizes are recorded; contents are never read.

use leptos::prelude::*;
use leptos_icons::Icon;
use notes_buddy_core::UploadedFile;
use notes_buddy_core::config::ACCEPT_ATTRIBUTE;
use notes_buddy_core::files::is_accepted;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/file_upload.module.css");

/// Drop-zone style file picker with the list of registered files.
///
/// `on_uploaded` runs with each accepted file name after it is registered.
#[component]
pub fn FileUpload(
    #[prop(optional)] on_uploaded: Option<Callback<String>>,
    #[prop(default = "Click to upload PDF, DOC, or TXT files")] hint: &'static str,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let input_id = "file-upload";

    let on_change = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(list) = input.files() else {
            return;
        };

        for i in 0..list.length() {
            let Some(file) = list.item(i) else {
                continue;
            };
            let name = file.name();
            if !is_accepted(&name) {
                ctx.toasts
                    .error("Unsupported file", format!("{} is not a PDF, DOC or TXT file", name));
                continue;
            }
            ctx.add_file(UploadedFile::new(name.clone(), file.size() as u64));
            if let Some(callback) = on_uploaded {
                callback.run(name);
            }
        }

        // Allow picking the same file again
        input.set_value("");
    };

    let files = Memo::new(move |_| ctx.files.with(|r| r.files().to_vec()));

    view! {
        <div class=css::wrapper>
            <label for=input_id class=css::dropzone>
                <input
                    id=input_id
                    class=css::hidden
                    type="file"
                    multiple=true
                    accept=ACCEPT_ATTRIBUTE
                    on:change=on_change
                />
                <span class=css::dropIcon><Icon icon=ic::UPLOAD /></span>
                <span class=css::hint>{hint}</span>
            </label>

            <ul class=css::list>
                <For
                    each=move || files.get()
                    key=|file| file.name.clone()
                    children=move |file| {
                        let name = file.name.clone();
                        view! {
                            <li class=css::item>
                                <span class=css::fileIcon><Icon icon=ic::FILE /></span>
                                <div class=css::meta>
                                    <p class=css::name>{file.name.clone()}</p>
                                    <p class=css::size>{file.display_size()}</p>
                                </div>
                                <button
                                    class=css::remove
                                    title="Remove file"
                                    on:click=move |_| ctx.remove_file(&name)
                                >
                                    <Icon icon=ic::CLOSE />
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
