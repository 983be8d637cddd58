use dioxus::prelude::*;
use store::block::CodeWorkspace;
use ui::icons::{FaCode, FaPlay, FaTerminal};
use ui::Icon;

/// Browser code scratchpad: file tabs over plain text buffers.
#[component]
pub fn BlockPage() -> Element {
    let mut workspace = use_signal(CodeWorkspace::new);

    let ws = workspace.read();
    let files: Vec<String> = ws.files().iter().map(|f| f.name.clone()).collect();
    let active = ws.active_file().clone();
    let terminal = ws.terminal().to_vec();
    drop(ws);

    rsx! {
        div {
            class: "block-ide",
            aside {
                class: "block-explorer",
                p { class: "muted", "Explorer" }
                for name in files.iter().cloned() {
                    button {
                        key: "{name}",
                        class: if name == active.name { "block-file active" } else { "block-file" },
                        onclick: {
                            let name = name.clone();
                            move |_| {
                                workspace.write().open(&name);
                            }
                        },
                        Icon { icon: FaCode, width: 12, height: 12 }
                        " {name}"
                    }
                }
            }
            section {
                class: "block-editor",
                div {
                    class: "block-tabs",
                    span { class: "block-tab active", "{active.name}" }
                    span { class: "muted", "{active.language().label()}" }
                    button {
                        class: "btn btn-primary btn-sm",
                        onclick: move |_| workspace.write().run(),
                        Icon { icon: FaPlay, width: 12, height: 12 }
                        " Run"
                    }
                }
                textarea {
                    class: "input mono block-buffer",
                    spellcheck: "false",
                    value: "{active.content}",
                    oninput: move |evt| workspace.write().edit(evt.value()),
                }
                div {
                    class: "block-terminal mono",
                    div {
                        class: "block-terminal-header",
                        Icon { icon: FaTerminal, width: 12, height: 12 }
                        " Terminal"
                        button {
                            class: "link-button",
                            onclick: move |_| workspace.write().clear_terminal(),
                            "clear"
                        }
                    }
                    for (i, line) in terminal.iter().enumerate() {
                        div { key: "{i}", "{line}" }
                    }
                }
            }
        }
    }
}
