//! Partner and product logos.

use super::Asset;

pub(super) const ENTRIES: &[Asset] = &[
    Asset {
        name: "ifood",
        markup: r#"<path d="M6 14h6l-4 22H2l4-22Zm1.5-8h6l-1.2 6h-6l1.2-6ZM18 20h-4l1-5h4l.6-3C20.4 8 23.6 6 28 6h4l-1 5h-3c-1.5 0-2.4.7-2.7 2.2L25 15h5l-1 5h-5l-3.2 16h-6L18 20Zm18 16c-5 0-8-3.4-7-8.6.9-5 5.2-8.4 10.2-8.4 5 0 8 3.4 7 8.6-.9 5-5.2 8.4-10.2 8.4Zm1-5c2 0 3.5-1.4 3.9-3.5.4-2.1-.6-3.5-2.6-3.5s-3.5 1.4-3.9 3.5c-.4 2.1.6 3.5 2.6 3.5Zm19 5c-5 0-8-3.4-7-8.6.9-5 5.2-8.4 10.2-8.4 5 0 8 3.4 7 8.6-.9 5-5.2 8.4-10.2 8.4Zm1-5c2 0 3.5-1.4 3.9-3.5.4-2.1-.6-3.5-2.6-3.5s-3.5 1.4-3.9 3.5c-.4 2.1.6 3.5 2.6 3.5Zm30-25h6l-6 30h-5.6l.3-1.7A8 8 0 0 1 83 36c-4.4 0-7-3.4-6.1-8.6.9-5 4.7-8.4 9-8.4 1.8 0 3.3.6 4.3 1.7L79 6Zm5 25c2 0 3.5-1.4 3.9-3.5.4-2.1-.6-3.5-2.6-3.5s-3.5 1.4-3.9 3.5c-.4 2.1.6 3.5 2.6 3.5Z"/><path d="M70 40c6 0 12-2 16-6l2 2c-5 5-11 7-18 7-5 0-9-1-13-3l1-2.6c3.6 1.7 7.6 2.6 12 2.6Z"/>"#,
        color: "#E8222A",
        width: 96,
        height: 48,
    },
    Asset {
        name: "yooga",
        markup: r#"<path d="M4 8h7l5 11 5-11h7L19 26v10h-6V26L4 8Zm34 8c5.5 0 10 4.5 10 10s-4.5 10-10 10-10-4.5-10-10 4.5-10 10-10Zm0 5.5a4.5 4.5 0 1 0 0 9 4.5 4.5 0 0 0 0-9ZM60 16c5.5 0 10 4.5 10 10s-4.5 10-10 10-10-4.5-10-10 4.5-10 10-10Zm0 5.5a4.5 4.5 0 1 0 0 9 4.5 4.5 0 0 0 0-9Zm23-5.5c2.2 0 4.2.7 5.8 2V16.5H94V35c0 6-4.5 10-11 10-3.4 0-6.4-1-8.6-2.8l2.6-4.4c1.6 1.3 3.6 2 5.8 2 3.3 0 5.4-1.8 5.4-4.8v-.8A9.8 9.8 0 0 1 83 36a10 10 0 0 1 0-20Zm0 5.5a4.5 4.5 0 1 0 0 9 4.5 4.5 0 0 0 0-9Z"/>"#,
        color: "#FF5A00",
        width: 112,
        height: 48,
    },
    Asset {
        name: "rappi",
        markup: r#"<path d="M4 14h5.6v2.6c1.3-2 3.3-3 5.9-3v5.7h-1c-3.1 0-4.9 1.6-4.9 5V34H4V14Zm22-.4c2.5 0 4.6 1 6 2.6V14h5.6v20H32v-2.2a7.8 7.8 0 0 1-6 2.6c-5.2 0-9-4.4-9-10.4s3.8-10.4 9-10.4Zm1.4 5.2c-2.7 0-4.7 2.2-4.7 5.2s2 5.2 4.7 5.2 4.7-2.2 4.7-5.2-2-5.2-4.7-5.2Zm14.6-4.8h5.6v2.2a7.8 7.8 0 0 1 6-2.6c5.2 0 9 4.4 9 10.4s-3.8 10.4-9 10.4c-2.5 0-4.6-1-6-2.6V42H42V14Zm10.3 4.8c-2.7 0-4.7 2.2-4.7 5.2s2 5.2 4.7 5.2 4.7-2.2 4.7-5.2-2-5.2-4.7-5.2ZM64 14h5.6v2.2a7.8 7.8 0 0 1 6-2.6c5.2 0 9 4.4 9 10.4s-3.8 10.4-9 10.4c-2.5 0-4.6-1-6-2.6V42H64V14Zm10.3 4.8c-2.7 0-4.7 2.2-4.7 5.2s2 5.2 4.7 5.2 4.7-2.2 4.7-5.2-2-5.2-4.7-5.2ZM87 14h5.6v20H87V14Zm2.8-9a3.2 3.2 0 1 1 0 6.4 3.2 3.2 0 0 1 0-6.4Z"/>"#,
        color: "#FF441F",
        width: 96,
        height: 48,
    },
    Asset {
        name: "uber-eats",
        markup: r#"<path d="M4 8h5v14c0 4 2.2 6.2 5.5 6.2S20 26 20 22V8h5v26h-5v-2.6A9.6 9.6 0 0 1 13.2 34C7.8 34 4 30.2 4 24V8Zm26 0h4.8v9.4a9 9 0 0 1 6.4-2.6c5.4 0 9.6 4.3 9.6 9.6S46.6 34 41.2 34a9 9 0 0 1-6.5-2.7V34H30V8Zm10.6 11.2a5.2 5.2 0 1 0 0 10.4 5.2 5.2 0 0 0 0-10.4Zm23.6-4.4c5.3 0 9.2 4 9.2 9.3v1.5H58.6a5.1 5.1 0 0 0 5.2 4.3c1.8 0 3.2-.7 4.4-1.9l3.3 2.4A9.8 9.8 0 0 1 63.8 34a9.6 9.6 0 0 1-9.8-9.6c0-5.3 4.1-9.6 10.2-9.6Zm-5.5 7.6h10.4a5 5 0 0 0-5-3.6 5.2 5.2 0 0 0-5.4 3.6ZM88 19.6h-1.8c-2.8 0-4.8 2.2-4.8 5.6V34h-4.8V15.3h4.7v2.3c1.2-1.7 2.8-2.8 5.2-2.8H88v4.8Z"/><path d="M92 38H4v4h88v-4Z"/>"#,
        color: "#06C167",
        width: 96,
        height: 48,
    },
    Asset {
        name: "aiqfome",
        markup: r#"<path d="M10 14c2.6 0 4.7 1 6 2.6V14h5.2v20H16v-2.6a7.5 7.5 0 0 1-6 3C5 34.4 1.6 30 1.6 24S5 13.6 10 14Zm1.2 4.8c-2.6 0-4.4 2.2-4.4 5.2s1.8 5.2 4.4 5.2 4.4-2.2 4.4-5.2-1.8-5.2-4.4-5.2ZM25 14h5.2v20H25V14Zm2.6-9a3 3 0 1 1 0 6 3 3 0 0 1 0-6ZM43 14c2.5 0 4.6 1 6 2.6V14h5.2v28H49V31.4a7.5 7.5 0 0 1-6 3c-5 0-8.4-4.4-8.4-10.4S38 13.6 43 14Zm1.2 4.8c-2.6 0-4.4 2.2-4.4 5.2s1.8 5.2 4.4 5.2 4.4-2.2 4.4-5.2-1.8-5.2-4.4-5.2ZM62 14v-1.6C62 8 64.6 5 69.4 5H72v4.8h-2c-1.6 0-2.6.8-2.6 2.6V14H72v4.8h-4.6V34H62V18.8h-3V14h3Zm19 0c5.8 0 10.4 4.5 10.4 10.2S86.8 34.4 81 34.4 70.6 30 70.6 24.2 75.2 14 81 14Zm0 4.8a5.3 5.3 0 1 0 0 10.6 5.3 5.3 0 0 0 0-10.6Z"/>"#,
        color: "#7B1FA2",
        width: 96,
        height: 48,
    },
    Asset {
        name: "anota-ai",
        markup: r#"<path d="M14 4a20 20 0 1 1 0 40 20 20 0 0 1 0-40Zm0 8.4-7.6 19.2h5.2l1.2-3.4h6.4l1.2 3.4h5.2L18 12.4h-4Zm2 5.8 1.8 5.6h-3.6l1.8-5.6ZM44 18h4.8v2a7 7 0 0 1 5.4-2.4c4.2 0 6.8 2.8 6.8 7.4V34h-5V26c0-2.6-1.2-4-3.4-4s-3.6 1.6-3.6 4.2V34h-5V18Zm28.6-.4c5 0 8.8 3.7 8.8 8.6 0 4.9-3.8 8.6-8.8 8.6s-8.8-3.7-8.8-8.6c0-4.9 3.8-8.6 8.8-8.6Zm0 4.4a4.2 4.2 0 1 0 0 8.4 4.2 4.2 0 0 0 0-8.4ZM84 13h5v5h4v4.4h-4V28c0 1.2.6 1.8 1.8 1.8H93V34h-3.4C86 34 84 32 84 28.4v-6H81.6V18H84v-5Z"/>"#,
        color: "#FF6B00",
        width: 96,
        height: 48,
    },
];
