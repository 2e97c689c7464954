/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

use std::fmt::{Write,Display};

/// a simple standalone XML writer that produces indented XML documents from (nested) closures.
/// Useful for fixed document layouts consumed by external tools where we don't need a full
/// serialization framework. Use like so:
/// ```
///     use gsb_common::xml_writer::XmlWriter;
///     let mut w = XmlWriter::new();
///     w.write_declaration();
///     w.write_element( "Root", &[("count", "2")], |w|{
///         w.write_text_element( "Foo", &[], "foo & bar");
///         w.write_text_element( "Bar", &[("unit", "m")], 42.0);
///     });
///     assert!( w.as_str().contains("<Foo>foo &amp; bar</Foo>"));
/// ```
pub struct XmlWriter {
    buf: String,
    level: usize,
    indent: &'static str,
}

impl XmlWriter {
    pub fn new()->Self {
        XmlWriter { buf: String::new(), level: 0, indent: "  " }
    }

    pub fn with_capacity (len: usize)->Self {
        XmlWriter { buf: String::with_capacity(len), level: 0, indent: "  " }
    }

    pub fn clear (&mut self) {
        self.buf.clear();
        self.level = 0;
    }

    pub fn write_declaration (&mut self) {
        self.buf.push_str( r#"<?xml version="1.0" encoding="UTF-8" standalone="no" ?>"#);
        self.buf.push('\n');
    }

    /// write an element with nested content that is produced by the provided closure
    pub fn write_element (&mut self, tag: &str, attrs: &[(&str,&str)], f: impl FnOnce(&mut XmlWriter)) {
        self.write_indent();
        self.write_start_tag( tag, attrs);
        self.buf.push('\n');

        self.level += 1;
        f(self);
        self.level -= 1;

        self.write_indent();
        write!( self.buf, "</{tag}>\n");
    }

    /// write a single line element with (escaped) text content
    pub fn write_text_element<T:Display> (&mut self, tag: &str, attrs: &[(&str,&str)], text: T) {
        self.write_indent();
        self.write_start_tag( tag, attrs);
        escape_into( &mut self.buf, &text.to_string());
        write!( self.buf, "</{tag}>\n");
    }

    pub fn as_str (&self)->&str { self.buf.as_str() }

    pub fn len (&self)->usize { self.buf.len() }

    fn write_start_tag (&mut self, tag: &str, attrs: &[(&str,&str)]) {
        write!( self.buf, "<{tag}");
        for (k,v) in attrs {
            write!( self.buf, " {k}=\"");
            escape_into( &mut self.buf, v);
            self.buf.push('"');
        }
        self.buf.push('>');
    }

    fn write_indent (&mut self) {
        for _ in 0..self.level { self.buf.push_str( self.indent) }
    }
}

impl ToString for XmlWriter {
    fn to_string (&self)->String { self.buf.clone() }
}

fn escape_into (buf: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => buf.push_str("&amp;"),
            '<' => buf.push_str("&lt;"),
            '>' => buf.push_str("&gt;"),
            '"' => buf.push_str("&quot;"),
            '\'' => buf.push_str("&apos;"),
            c => buf.push(c)
        }
    }
}
