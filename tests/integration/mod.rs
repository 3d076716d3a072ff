mod launchpad_workflows;
