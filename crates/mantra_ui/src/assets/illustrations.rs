//! Spot illustrations for empty, error, and confirmation states.

use super::Asset;

pub(super) const ENTRIES: &[Asset] = &[
    Asset {
        name: "empty-box",
        markup: r#"<path opacity=".16" d="M20 124c0-4.4 35.8-8 80-8s80 3.6 80 8-35.8 8-80 8-80-3.6-80-8Z"/><path d="M40 52 100 28l60 24v56l-60 24-60-24V52Zm60 4 46-18-46-18-46 18 46 18Zm-52 48.6 48 19.2V63.6L48 44.4v60.2Zm56 19.2 48-19.2V44.4l-48 19.2v60.2Z"/><path opacity=".4" d="M100 56 54 38l-12 18 46 18 12-18Zm0 0 46-18 12 18-46 18-12-18Z"/>"#,
        color: "#7A7A85",
        width: 200,
        height: 140,
    },
    Asset {
        name: "search-not-found",
        markup: r#"<path opacity=".16" d="M30 128c0-4.4 31.3-8 70-8s70 3.6 70 8-31.3 8-70 8-70-3.6-70-8Z"/><path d="M88 16a48 48 0 0 1 38.4 76.8l30.4 30.4a6 6 0 0 1-8.5 8.5l-30.4-30.4A48 48 0 1 1 88 16Zm0 12a36 36 0 1 0 0 72 36 36 0 0 0 0-72Z"/><path opacity=".4" d="M74.3 49.7a4 4 0 0 1 5.6 0L88 57.8l8.1-8.1a4 4 0 1 1 5.6 5.6L93.7 63.4l8 8a4 4 0 1 1-5.6 5.7l-8.1-8.1-8.1 8.1a4 4 0 1 1-5.6-5.7l8-8-8-8.1a4 4 0 0 1 0-5.6Z"/>"#,
        color: "#7A7A85",
        width: 200,
        height: 140,
    },
    Asset {
        name: "connection-error",
        markup: r#"<path opacity=".16" d="M30 128c0-4.4 31.3-8 70-8s70 3.6 70 8-31.3 8-70 8-70-3.6-70-8Z"/><path d="M100 36c26.8 0 51 10.6 68.9 27.8a6 6 0 1 1-8.3 8.7A87.6 87.6 0 0 0 100 48c-23.5 0-44.8 9.2-60.6 24.5a6 6 0 0 1-8.3-8.7A99.6 99.6 0 0 1 100 36Zm0 28c19 0 36.2 7.6 48.8 19.9a6 6 0 1 1-8.4 8.6A57.6 57.6 0 0 0 100 76c-15.6 0-29.8 6.2-40.3 16.5a6 6 0 0 1-8.4-8.6A69.6 69.6 0 0 1 100 64Zm0 28a12 12 0 1 1 0 24 12 12 0 0 1 0-24Z"/><path opacity=".4" d="M44.2 20.2a6 6 0 0 1 8.5 0l104 104a6 6 0 0 1-8.5 8.5l-104-104a6 6 0 0 1 0-8.5Z"/>"#,
        color: "#D6453D",
        width: 200,
        height: 140,
    },
    Asset {
        name: "success",
        markup: r#"<path opacity=".16" d="M40 128c0-4.4 26.9-8 60-8s60 3.6 60 8-26.9 8-60 8-60-3.6-60-8Z"/><path d="M100 12a52 52 0 1 1 0 104 52 52 0 0 1 0-104Z" opacity=".24"/><path d="M100 24a40 40 0 1 1 0 80 40 40 0 0 1 0-80Zm21.2 24.8a5 5 0 0 0-7.1 0L94 68.9l-8.1-8.1a5 5 0 1 0-7.1 7.1l11.7 11.6a5 5 0 0 0 7 0l23.7-23.6a5 5 0 0 0 0-7.1Z"/>"#,
        color: "#3CA85F",
        width: 200,
        height: 140,
    },
    Asset {
        name: "maintenance",
        markup: r#"<path opacity=".16" d="M30 128c0-4.4 31.3-8 70-8s70 3.6 70 8-31.3 8-70 8-70-3.6-70-8Z"/><path d="M132 20a28 28 0 0 1 26.6 36.8l-10.2-10.2a4 4 0 0 0-5.7 0l-8.5 8.5a4 4 0 0 0 0 5.7l10.2 10.2A28 28 0 0 1 107.6 78L66 119.6a12 12 0 0 1-17-17L90.6 61A28 28 0 0 1 132 20ZM57.5 105a4 4 0 1 0 0 8 4 4 0 0 0 0-8Z"/><path opacity=".4" d="M40 20h20l6 16-8 8-16-6-2-18Zm22 30 22 22-8 8-22-22 8-8Z"/>"#,
        color: "#E0A100",
        width: 200,
        height: 140,
    },
];
