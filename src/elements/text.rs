element_type!(
    /// Static text node
    Text,
    "text"
);

element_type!(
    /// Image or svg icon
    Icon,
    "icon"
);

element_type!(
    /// Form label or caption
    Label,
    "label"
);
