use sledgehammer_bindgen::bindgen;

#[bindgen]
mod js {

    struct Channel;

    const JS: &str = r#"const byId=(id)=>document.getElementById(id);"#;

    fn set_html(id: &str, html: &str) {
        r#"{const el=byId($id$);if(el){el.innerHTML=$html$;}}"#
    }

    fn set_text(id: &str, text: &str) {
        r#"{const el=byId($id$);if(el){el.textContent=$text$;}}"#
    }

    fn add_class(id: &str, name: &str) {
        r#"{const el=byId($id$);if(el){el.classList.add($name$);}}"#
    }

    fn remove_class(id: &str, name: &str) {
        r#"{const el=byId($id$);if(el){el.classList.remove($name$);}}"#
    }

    fn disable(id: &str) {
        r#"{const el=byId($id$);if(el){el.setAttribute("disabled","disabled");}}"#
    }

    fn enable(id: &str) {
        r#"{const el=byId($id$);if(el){el.removeAttribute("disabled");}}"#
    }

    fn disable_all(selector: &str) {
        r#"document.querySelectorAll($selector$).forEach((el)=>el.setAttribute("disabled","disabled"));"#
    }

    fn enable_all(selector: &str) {
        r#"document.querySelectorAll($selector$).forEach((el)=>el.removeAttribute("disabled"));"#
    }

    fn hide_all(selector: &str) {
        r#"document.querySelectorAll($selector$).forEach((el)=>{el.style.display="none";});"#
    }
}
