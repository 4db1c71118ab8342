use chrono::Utc;
use yew::prelude::*;

use crate::components::footer::Footer;

#[derive(Properties, PartialEq)]
struct LegalLayoutProps {
    title: AttrValue,
    children: Children,
}

#[function_component(LegalLayout)]
fn legal_layout(props: &LegalLayoutProps) -> Html {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let updated = Utc::now().format("%d/%m/%Y").to_string();

    html! {
        <div class="page">
            <main class="page-main narrow legal-page">
                <h1 class="page-title">{&props.title}</h1>
                <p class="muted">{format!("Last Updated: {}", updated)}</p>
                { for props.children.iter() }
            </main>
            <Footer />
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <LegalLayout title="Privacy Policy">
            <h2>{"1. Introduction"}</h2>
            <p>{"At Vulva La Replica (\"VLV\", \"we\", \"us\", or \"our\"), we respect your privacy and are committed to protecting your personal data. This Privacy Policy explains how we collect, use, and safeguard your information when you visit our website or use our services."}</p>

            <h2>{"2. Information We Collect"}</h2>
            <p>{"We may collect the following types of information:"}</p>
            <ul>
                <li><strong>{"Personal Information: "}</strong>{"Name, email address, phone number, and billing information."}</li>
                <li><strong>{"Biometric Data: "}</strong>{"3D scans of body parts for the purpose of creating personalized products."}</li>
                <li><strong>{"Usage Data: "}</strong>{"Information about how you interact with our website and services."}</li>
                <li><strong>{"Communications: "}</strong>{"Records of your correspondence with us."}</li>
            </ul>

            <h2>{"3. How We Use Your Information"}</h2>
            <p>{"We use your information for purposes including:"}</p>
            <ul>
                <li>{"Creating and manufacturing your personalized products"}</li>
                <li>{"Processing payments and fulfilling orders"}</li>
                <li>{"Communicating with you about your account or products"}</li>
                <li>{"Improving our website and services"}</li>
                <li>{"Marketing and promotional purposes (with your consent)"}</li>
            </ul>

            <h2>{"4. Data Security"}</h2>
            <p>{"We implement appropriate security measures to protect your personal information. However, no method of transmission over the Internet or electronic storage is 100% secure, and we cannot guarantee absolute security."}</p>

            <h2>{"5. Your Data Rights"}</h2>
            <p>{"Depending on your location, you may have rights regarding your personal data, including:"}</p>
            <ul>
                <li>{"The right to access your data"}</li>
                <li>{"The right to correct inaccurate data"}</li>
                <li>{"The right to delete your data"}</li>
                <li>{"The right to restrict processing"}</li>
                <li>{"The right to data portability"}</li>
                <li>{"The right to object to processing"}</li>
            </ul>

            <h2>{"6. Third-Party Services"}</h2>
            <p>{"We may use third-party service providers to assist with our business operations. These third parties have access to your personal information only to perform specific tasks on our behalf and are obligated to maintain its confidentiality."}</p>

            <h2>{"7. Cookies and Tracking Technologies"}</h2>
            <p>{"We use cookies and similar tracking technologies to collect information about your browsing activities and to improve your experience on our website. Your choice is stored in your browser and can be withdrawn at any time by clearing your browser storage."}</p>

            <h2>{"8. Changes to This Privacy Policy"}</h2>
            <p>{"We may update this Privacy Policy from time to time. We will notify you of any changes by posting the new Privacy Policy on this page and updating the \"Last Updated\" date."}</p>

            <h2>{"9. Contact Information"}</h2>
            <p>{"If you have any questions about this Privacy Policy, please contact us at privacy@vulvalareplica.com."}</p>
        </LegalLayout>
    }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! {
        <LegalLayout title="Terms of Service">
            <h2>{"1. Introduction"}</h2>
            <p>{"Welcome to Vulva La Replica (\"VLV\", \"we\", \"us\", or \"our\"). By accessing or using our website, products, or services, you agree to be bound by these Terms of Service (\"Terms\")."}</p>

            <h2>{"2. Eligibility"}</h2>
            <p>{"You must be at least 18 years old and capable of forming a binding contract to use our services. By using our services, you represent that you meet these requirements."}</p>

            <h2>{"3. Content Creator Terms"}</h2>
            <p>{"If you are using our platform as a content creator:"}</p>
            <ul>
                <li>{"You affirm that you have all necessary rights and permissions to create and sell products based on your physical likeness."}</li>
                <li>{"You understand that you are responsible for ensuring your compliance with all applicable laws related to adult content creation and distribution."}</li>
                <li>{"You agree to provide accurate information during the registration and product creation processes."}</li>
            </ul>

            <h2>{"4. Intellectual Property"}</h2>
            <p>{"You retain ownership of your content and likeness. By using our services, you grant us a non-exclusive license to use, reproduce, and distribute your content solely for the purpose of manufacturing and selling your personalized products."}</p>

            <h2>{"5. Prohibited Uses"}</h2>
            <p>{"You agree not to:"}</p>
            <ul>
                <li>{"Use our services for any illegal purpose"}</li>
                <li>{"Submit false or misleading information"}</li>
                <li>{"Infringe upon the intellectual property rights of others"}</li>
                <li>{"Attempt to reverse-engineer our technology or processes"}</li>
            </ul>

            <h2>{"6. Disclaimer of Warranties"}</h2>
            <p>{"Our services are provided \"as is\" and \"as available\" without warranties of any kind, either express or implied."}</p>

            <h2>{"7. Limitation of Liability"}</h2>
            <p>{"In no event shall VLV, its affiliates, or their respective officers, directors, employees, or agents be liable for any indirect, incidental, special, punitive, or consequential damages arising out of or related to your use of our services."}</p>

            <h2>{"8. Changes to Terms"}</h2>
            <p>{"We reserve the right to modify these Terms at any time. We will provide notice of significant changes by posting the updated Terms on our website. Your continued use of our services after such changes constitutes your acceptance of the new Terms."}</p>

            <h2>{"9. Governing Law"}</h2>
            <p>{"These Terms shall be governed by and construed in accordance with the laws of the jurisdiction in which VLV is registered, without regard to its conflict of law provisions."}</p>

            <h2>{"10. Contact Information"}</h2>
            <p>{"If you have any questions about these Terms, please contact us at support@vulvalareplica.com."}</p>
        </LegalLayout>
    }
}
